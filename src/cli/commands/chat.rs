use anyhow::Result;

use crate::chat::ChatSession;
use crate::config::ResolveOptions;
use crate::engine::Engine;
use crate::ui::View;

pub struct ChatOptions {
    pub view: View,
    pub provider: Option<String>,
    pub offline: bool,
    pub show_tiers: bool,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = super::load_config(&ResolveOptions {
        provider: options.provider,
        offline: options.offline,
    })?;
    let engine = Engine::from_config(&config)?;

    let mut session = ChatSession::new(engine, config, options.view, options.show_tiers);
    session.run().await
}
