pub mod mock_bot;
