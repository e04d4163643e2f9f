/// Screen module exports

pub mod assessment;
pub mod results;
pub mod welcome;

pub use assessment::AssessmentScreen;
pub use results::ResultsScreen;
pub use welcome::WelcomeScreen;
