pub mod memory_draft_store;
