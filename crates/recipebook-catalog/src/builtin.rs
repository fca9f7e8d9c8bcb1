//! The built-in recipe catalog.
//!
//! Constructed once behind a `LazyLock` and exposed as an immutable view.
//! The example payloads are inert text: they are displayed, never parsed
//! or executed.

use std::sync::LazyLock;

use crate::recipe::Recipe;
use crate::registry::RecipeRegistry;

static BUILTIN: LazyLock<RecipeRegistry> = LazyLock::new(|| {
    RecipeRegistry::from_recipes(builtin_recipes()).expect("built-in catalog is valid")
});

/// The built-in registry, initialized on first access.
pub fn builtin() -> &'static RecipeRegistry {
    &BUILTIN
}

/// The built-in catalog as a plain recipe list, for composing with
/// user-provided recipes before registry construction.
pub fn builtin_recipes() -> Vec<Recipe> {
    let mut recipes = vec![
        Recipe::new("1", "Class composition with clsx", "styling")
            .with_description(
                "Utility function for combining Tailwind classes safely using clsx and tailwind-merge.",
            )
            .with_code(
                r#"import { clsx, type ClassValue } from 'clsx';
import { twMerge } from 'tailwind-merge';

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}

// Usage:
const className = cn(
  'base-class',
  condition && 'conditional-class',
  ['array-class-1', 'array-class-2'],
  { 'object-class': true }
);"#,
            )
            .with_tags(["tailwind", "clsx", "styling", "utils"])
            .with_author("Frontend Guild")
            .with_created_at("2024-03-15"),
        Recipe::new("2", "Fade animation with Framer Motion", "animations")
            .with_description("Reusable component for fade animations using Framer Motion.")
            .with_code(
                r#"import { motion } from 'framer-motion';

export const FadeIn = ({ children }) => (
  <motion.div
    initial={{ opacity: 0 }}
    animate={{ opacity: 1 }}
    exit={{ opacity: 0 }}
    transition={{ duration: 0.3 }}
  >
    {children}
  </motion.div>
);

// Usage:
function App() {
  return (
    <FadeIn>
      <h1>Faded content</h1>
    </FadeIn>
  );
}"#,
            )
            .with_tags(["animation", "framer-motion", "transitions"])
            .with_author("Frontend Guild")
            .with_created_at("2024-03-15"),
        Recipe::new("3", "Form with React Hook Form and Zod", "forms")
            .with_description("Example form using React Hook Form with Zod validation.")
            .with_code(
                r#"import { useForm } from 'react-hook-form';
import { zodResolver } from '@hookform/resolvers/zod';
import { z } from 'zod';

const schema = z.object({
  email: z.string().email('Invalid email'),
  password: z.string().min(6, 'At least 6 characters'),
});

type FormData = z.infer<typeof schema>;

export function LoginForm() {
  const {
    register,
    handleSubmit,
    formState: { errors },
  } = useForm<FormData>({
    resolver: zodResolver(schema),
  });

  const onSubmit = (data: FormData) => {
    console.log(data);
  };

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register('email')} />
      {errors.email && <span>{errors.email.message}</span>}

      <input type="password" {...register('password')} />
      {errors.password && <span>{errors.password.message}</span>}

      <button type="submit">Sign in</button>
    </form>
  );
}"#,
            )
            .with_tags(["forms", "validation", "react-hook-form", "zod"])
            .with_author("Frontend Guild")
            .with_created_at("2024-03-15"),
        Recipe::new("4", "Global store with Zustand", "client-state")
            .with_description("Example of global state management using Zustand.")
            .with_code(
                r#"import { create } from 'zustand';

interface User {
  id: string;
  name: string;
}

interface AuthStore {
  user: User | null;
  isAuthenticated: boolean;
  login: (user: User) => void;
  logout: () => void;
}

export const useAuthStore = create<AuthStore>((set) => ({
  user: null,
  isAuthenticated: false,
  login: (user) => set({ user, isAuthenticated: true }),
  logout: () => set({ user: null, isAuthenticated: false }),
}));

// Usage:
function Profile() {
  const { user, logout } = useAuthStore();

  return (
    <div>
      <h1>Hello, {user?.name}</h1>
      <button onClick={logout}>Sign out</button>
    </div>
  );
}"#,
            )
            .with_tags(["state-management", "zustand", "global-state"])
            .with_author("Frontend Guild")
            .with_created_at("2024-03-15"),
        // Ad-hoc id inherited from the source catalog; ids are opaque.
        Recipe::new("473287328", "React Query with Zod schema", "data-fetching")
            .with_description(
                "TanStack Query implementation with schema validation using Zod.",
            )
            .with_code(
                r#"import { apiUrls } from '@/shared/api-urls'
  import { api } from '@/shared/services/api'
  import { useQuery } from '@tanstack/react-query'
  import { z } from 'zod'

  // Validation schema
  const programStepResponseSchema = z.object({
    id: z.string(),
    name: z.string(),
    baseQuestionGroup: z.object({
      id: z.string(),
      name: z.string(),
      completed: z.boolean(),
      totalItemCount: z.number(),
      completedItemCount: z.number(),
    }),
    items: z.array(
      z.object({
        resource: z.object({
          id: z.string(),
          name: z.string(),
          banner: z.string(),
          durationInMinutes: z.number(),
          completed: z.boolean(),
          hasAttachments: z.boolean(),
        }),
        questionGroup: z.object({
          id: z.string(),
          name: z.string(),
          locked: z.boolean(),
          completed: z.boolean(),
        }).nullable(),
        completed: z.boolean(),
        totalItemCount: z.number(),
        completedItemCount: z.number(),
      })
    ),
  })

  // Type inferred from the schema
  type ProgramStepMicroProgress = z.infer<typeof programStepResponseSchema>

  // Data fetching function
  async function getProgramStepMicroProgress(programStepId: string) {
    const url = apiUrls.programSteps.microProgressByUser(programStepId)
    const response = await api.get(url)
    return programStepResponseSchema.parse(response.data)
  }

  // Query key for caching
  const queryKey = 'program-step-micro-progress'

  // Custom hook using React Query
  function useProgramStepMicroProgress(programStepId: string) {
    return useQuery({
      queryKey: [queryKey, programStepId],
      queryFn: () => getProgramStepMicroProgress(programStepId),
    })
  }

  // Usage:
  function ProgramStep({ programStepId }: { programStepId: string }) {
    const { data, isLoading, error } = useProgramStepMicroProgress(programStepId)

    if (isLoading) return <div>Loading...</div>
    if (error) return <div>Failed to load data</div>

    return (
      <div>
        <h1>{data?.name}</h1>
        <div>
          Progress: {data?.baseQuestionGroup.completedItemCount}
          of {data?.baseQuestionGroup.totalItemCount}
        </div>
      </div>
    )
  }"#,
            )
            .with_tags(["data-fetching", "react-query", "zod"])
            .with_author("Frontend Guild")
            .with_created_at("2024-03-15"),
        Recipe::new("5", "Date formatting with Day.js", "dates")
            .with_description("Utility for formatting dates using Day.js.")
            .with_code(
                r#"import dayjs from 'dayjs';
import relativeTime from 'dayjs/plugin/relativeTime';

// Setup
dayjs.extend(relativeTime);

export const dateUtils = {
  format: (date: string | Date, format = 'DD/MM/YYYY') => {
    return dayjs(date).format(format);
  },

  fromNow: (date: string | Date) => {
    return dayjs(date).fromNow();
  },

  isFuture: (date: string | Date) => {
    return dayjs(date).isAfter(dayjs());
  },
};

// Usage:
const date = new Date();
console.log(dateUtils.format(date)); // "15/03/2024"
console.log(dateUtils.fromNow(date)); // "a few seconds ago"
"#,
            )
            .with_tags(["dates", "formatting", "dayjs"])
            .with_author("Frontend Guild")
            .with_created_at("2024-03-15"),
    ];

    // Placeholder entries for categories awaiting real examples.
    let placeholders = [
        ("6", "icons", "Icons"),
        ("7", "components", "Components"),
        ("8", "validation", "Validation"),
        ("9", "server-state", "Server State"),
        ("10", "async", "Async"),
        ("11", "cookies", "Cookies"),
        ("12", "feature-flags", "Feature Flags"),
        ("13", "complex-features", "Complex Features"),
        ("14", "utils", "Utils"),
        ("15", "performance", "Performance"),
        ("16", "external-services", "External Services"),
    ];

    for (id, category, label) in placeholders {
        recipes.push(
            Recipe::new(id, "Coming soon", category)
                .with_description(format!("Example for {label} category is coming soon."))
                .with_tags([category])
                .with_author("Frontend Guild")
                .with_created_at("2024-03-15"),
        );
    }

    recipes
}
