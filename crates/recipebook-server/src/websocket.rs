//! WebSocket-based live reload.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to clients when the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveReloadMessage {
    /// Full page reload
    Reload,

    /// The catalog was reloaded from disk
    CatalogChanged {
        /// Number of recipes after the reload
        recipes: usize,
    },

    /// Connection established
    Connected,
}

/// Hub for broadcasting reload messages to all connected clients.
#[derive(Debug, Clone)]
pub struct LiveReloadHub {
    sender: broadcast::Sender<LiveReloadMessage>,
}

impl LiveReloadHub {
    /// Create a new hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: LiveReloadMessage) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(msg);
    }

    /// Subscribe to reload messages.
    pub fn subscribe(&self) -> broadcast::Receiver<LiveReloadMessage> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for LiveReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the client-side live reload script.
pub fn live_reload_script(ws_url: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const ws = new WebSocket('{}');
  let reconnectAttempts = 0;
  const maxReconnectAttempts = 10;

  ws.onopen = function() {{
    console.log('[livereload] Connected');
    reconnectAttempts = 0;
  }};

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);
    console.log('[livereload]', msg.type);

    switch (msg.type) {{
      case 'reload':
      case 'catalog_changed':
        location.reload();
        break;

      case 'connected':
        console.log('[livereload] Server acknowledged connection');
        break;
    }}
  }};

  ws.onclose = function() {{
    console.log('[livereload] Disconnected');
    if (reconnectAttempts < maxReconnectAttempts) {{
      reconnectAttempts++;
      setTimeout(function() {{
        console.log('[livereload] Reconnecting...');
        location.reload();
      }}, 1000 * reconnectAttempts);
    }}
  }};

  ws.onerror = function(e) {{
    console.error('[livereload] WebSocket error:', e);
  }};
}})();
"#,
        ws_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = LiveReloadHub::new();
        let mut rx = hub.subscribe();

        hub.send(LiveReloadMessage::Reload);

        match rx.try_recv() {
            Ok(LiveReloadMessage::Reload) => {}
            _ => panic!("Expected Reload message"),
        }
    }

    #[test]
    fn serializes_messages() {
        let msg = LiveReloadMessage::CatalogChanged { recipes: 18 };

        let json = serde_json::to_string(&msg).unwrap();

        assert!(json.contains("catalog_changed"));
        assert!(json.contains("18"));
    }

    #[test]
    fn script_embeds_socket_url() {
        let script = live_reload_script("ws://127.0.0.1:7878/__livereload");

        assert!(script.contains("ws://127.0.0.1:7878/__livereload"));
        assert!(script.contains("location.reload"));
    }
}
