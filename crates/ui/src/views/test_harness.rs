use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use club_core::time::fixed_clock;
use services::{
    ClubCatalog, CountdownService, InMemorySink, QuizFlowService, SignupService, SignupSink,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{ContactView, EventsView, HomeView, PlaygroundView, ProjectsView, QuizView};

struct TestApp {
    catalog: Arc<ClubCatalog>,
    countdown: Arc<CountdownService>,
    quiz_flow: Arc<QuizFlowService>,
    signups: Arc<SignupService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<ClubCatalog> {
        Arc::clone(&self.catalog)
    }

    fn countdown(&self) -> Arc<CountdownService> {
        Arc::clone(&self.countdown)
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    fn signups(&self) -> Arc<SignupService> {
        Arc::clone(&self.signups)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Events,
    Projects,
    Quiz,
    Playground,
    Contact,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Events => rsx! { EventsView {} },
        ViewKind::Projects => rsx! { ProjectsView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Playground => rsx! { PlaygroundView {} },
        ViewKind::Contact => rsx! { ContactView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let clock = fixed_clock();
    let catalog = Arc::new(ClubCatalog::seeded());
    let sink = Arc::new(InMemorySink::new()) as Arc<dyn SignupSink>;

    let app = Arc::new(TestApp {
        catalog: Arc::clone(&catalog),
        countdown: Arc::new(CountdownService::new(clock, Arc::clone(&catalog))),
        quiz_flow: Arc::new(QuizFlowService::new(Arc::clone(&catalog))),
        signups: Arc::new(SignupService::new(clock, Arc::clone(&catalog), sink)),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
