pub mod access_control_trait;
pub mod action_dispatcher_trait;
pub mod data_source_trait;
pub mod notifier_trait;
