pub mod letter_file_generator;
pub mod mock_sender;
pub mod smtp_sender;
