pub mod assistant;
pub mod community;
pub mod home;
pub mod nav;
pub mod onboarding;
pub mod portal;
pub mod resources;
pub mod settings;
