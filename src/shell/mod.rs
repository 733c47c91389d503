// Composition root for the transitions context.
//
// Responsibilities
// - Read config from environment.
// - Build the rule book policy, from a file when one is configured.
// - Wire the policy into the handle_event handler.

pub mod config;
pub mod state;

use anyhow::Context;
use std::sync::Arc;

use crate::modules::transitions::adapters::outbound::policy_rule_book::{
    RuleBook, RuleBookPolicy,
};
use crate::modules::transitions::use_cases::handle_event::handler::HandleEventHandler;
use crate::shell::config::ShellConfig;
use crate::shell::state::AppState;

pub fn build_state(config: &ShellConfig) -> anyhow::Result<AppState> {
    let book = match &config.rules_path {
        Some(path) => RuleBook::from_json_file(path, config.default_status)
            .with_context(|| format!("load rule book from {}", path.display()))?,
        None => RuleBook::new(config.default_status),
    };

    tracing::info!(
        rules = book.rules.len(),
        default_status = %book.default_status,
        "transition policy ready"
    );

    let policy = Arc::new(RuleBookPolicy::new(book));
    Ok(AppState {
        handler: Arc::new(HandleEventHandler::new(policy)),
    })
}
