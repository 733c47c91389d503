use crate::modules::transitions::adapters::outbound::policy_rule_book::RuleBookPolicy;
use crate::modules::transitions::use_cases::handle_event::handler::HandleEventHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<HandleEventHandler<RuleBookPolicy>>,
}
