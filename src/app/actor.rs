//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop.
    ///
    /// The first fetch is issued immediately, before any UI event arrives.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        self.start_fetch();
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // A closed UI channel means the UI is gone: treat it as quit
                    let quit = match event {
                        Some(event) => self.handle_ui_event(event),
                        None => true,
                    };
                    if quit {
                        self.shutdown();
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Refresh => self.start_fetch(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),
            UiEvent::Quit => return true,
        }

        false
    }

    fn start_fetch(&mut self) {
        if let Some(cmd) = self.state.begin_fetch() {
            let _ = self.network_tx.send(cmd);
        }
    }

    fn shutdown(&mut self) {
        if let Some(cmd) = self.state.cancel_fetch() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.network_tx.send(NetworkCommand::Shutdown);
    }
}
