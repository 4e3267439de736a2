use std::sync::Arc;

use services::{ClubCatalog, CountdownService, QuizFlowService, SignupService};

/// Everything the views need, provided by the application composition root
/// (e.g. `crates/app`).
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<ClubCatalog>;
    fn countdown(&self) -> Arc<CountdownService>;
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
    fn signups(&self) -> Arc<SignupService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<ClubCatalog>,
    countdown: Arc<CountdownService>,
    quiz_flow: Arc<QuizFlowService>,
    signups: Arc<SignupService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            countdown: app.countdown(),
            quiz_flow: app.quiz_flow(),
            signups: app.signups(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<ClubCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn countdown(&self) -> Arc<CountdownService> {
        Arc::clone(&self.countdown)
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn signups(&self) -> Arc<SignupService> {
        Arc::clone(&self.signups)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
