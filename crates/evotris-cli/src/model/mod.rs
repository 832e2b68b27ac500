pub mod ai_model;
