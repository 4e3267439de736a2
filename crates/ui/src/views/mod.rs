mod contact;
mod events;
mod home;
mod playground;
mod projects;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use contact::ContactView;
pub use events::EventsView;
pub use home::HomeView;
pub use playground::PlaygroundView;
pub use projects::ProjectsView;
pub use quiz::QuizView;
