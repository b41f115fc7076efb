pub mod moodboard;
