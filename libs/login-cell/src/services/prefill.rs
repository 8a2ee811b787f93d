use tracing::{debug, info, warn};

use booking_flow_cell::models::SharedWizard;

use crate::services::client::LoginProvider;

/// One-shot startup step: pull the platform profile, if any, into the
/// session. Every failure degrades to an unauthenticated session; nothing
/// here may block the wizard.
pub struct ProfilePrefillService<P> {
    provider: P,
}

impl<P: LoginProvider> ProfilePrefillService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns true when a profile was written into the session. The write
    /// may race early user edits to the name; last write wins.
    pub async fn run(&self, channel_id: &str, wizard: SharedWizard) -> bool {
        if channel_id.is_empty() {
            debug!("login channel id not set, skipping profile prefill");
            return false;
        }

        if let Err(err) = self.provider.init(channel_id).await {
            warn!(error = %err, "login sdk init failed, continuing unauthenticated");
            return false;
        }

        match self.provider.get_profile().await {
            Ok(Some(profile)) => {
                let mut state = wizard.lock().await;
                state.session.name = profile.display_name;
                state.session.login_user_id = Some(profile.user_id);
                state.login_linked = true;
                info!("session pre-filled from platform login");
                true
            }
            Ok(None) => {
                debug!("no active login, continuing unauthenticated");
                false
            }
            Err(err) => {
                warn!(error = %err, "profile fetch failed, continuing unauthenticated");
                false
            }
        }
    }
}
