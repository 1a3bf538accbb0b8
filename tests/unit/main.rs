mod test_auth;
mod test_config;
mod test_presentation;
mod test_storage;
