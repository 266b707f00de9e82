mod get_configuration;
mod list_configurations;

pub use get_configuration::GetConfigurationUseCase;
pub use list_configurations::ListConfigurationsUseCase;
