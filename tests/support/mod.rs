pub mod fitlab_env;
pub mod mock_service;
