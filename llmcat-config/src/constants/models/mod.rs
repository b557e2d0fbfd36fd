pub mod mistral;
