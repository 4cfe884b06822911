use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

use crate::config::AnimationConfig;
use crate::content::PROFILE;
use crate::logging::{log_event, LogLevel};
use crate::reveal::{Motion, RevealController, RevealPhase, Threshold, ViewportObserver};
use crate::schedule::{Rotation, Scheduler};
use crate::sections::{EducationSection, ExperienceSection, HeroSection, ProjectsSection, SkillsSection};
use crate::shell::{scroll_progress, scroll_target, SectionBounds, SectionId, ShellState};
use crate::typewriter::Typewriter;

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn measure_progress() -> f64 {
    let Some(win) = window() else {
        return 0.0;
    };
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let scroll_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let (_, viewport_height) = viewport_size();

    scroll_progress(scroll_y, scroll_height, viewport_height)
}

fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id.dom_id())?.get_bounding_client_rect();
            Some(SectionBounds {
                id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

pub(crate) fn scroll_to(top: f64, smooth: bool) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    win.scroll_to_with_scroll_to_options(&options);
}

fn scroll_to_section(section: SectionId, smooth: bool) {
    let offset_top = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.dom_id()))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| f64::from(element.offset_top()));

    if let Some(offset_top) = offset_top {
        scroll_to(scroll_target(offset_top), smooth);
    }
}

/// `IntersectionObserver`-backed viewport observation.
pub(crate) struct DomObserver;

pub(crate) struct DomRegistration {
    observer: IntersectionObserver,
    target: Element,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for DomRegistration {
    fn drop(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

impl ViewportObserver for DomObserver {
    type Target = Element;
    type Registration = DomRegistration;

    fn observe(
        &self,
        target: &Element,
        threshold: Threshold,
        mut on_ratio: Box<dyn FnMut(f64)>,
    ) -> Option<DomRegistration> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_ratio(entry.intersection_ratio());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.get()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(target);

        Some(DomRegistration {
            observer,
            target: target.clone(),
            _callback: callback,
        })
    }
}

#[derive(Clone, Copy)]
pub(crate) struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Shared by every section through context.
#[derive(Clone, Default, PartialEq)]
pub(crate) struct MotionSettings {
    pub config: Rc<AnimationConfig>,
    pub reduced_motion: bool,
}

impl MotionSettings {
    pub fn motion(&self, motion: Motion) -> Motion {
        if self.reduced_motion {
            motion.instant()
        } else {
            motion
        }
    }
}

#[hook]
pub(crate) fn use_motion() -> MotionSettings {
    use_context::<MotionSettings>().unwrap_or_default()
}

/// Flips to `true` once `node` scrolls into view and stays there.
#[hook]
pub(crate) fn use_reveal(node: NodeRef, section: SectionId) -> bool {
    let settings = use_motion();
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let config = Rc::clone(&settings.config);
            let element = node.cast::<Element>();
            let reveal_config = Rc::clone(&config);
            let reveal_visible = visible.clone();

            let controller = RevealController::mount(
                &DomObserver,
                element.as_ref(),
                config.reveal_threshold,
                move |ratio| {
                    log_event(
                        &reveal_config,
                        LogLevel::Info,
                        "section_revealed",
                        json!({ "section": section, "ratio": ratio }),
                    );
                    reveal_visible.set(true);
                },
            );

            if element.is_some() && controller.phase() == RevealPhase::Unobserved {
                log_event(
                    &config,
                    LogLevel::Info,
                    "observer_unavailable",
                    json!({ "section": section }),
                );
                visible.set(true);
            }

            move || drop(controller)
        });
    }

    *visible
}

/// Current typewriter text, re-rendered on every tick.
#[hook]
pub(crate) fn use_typewriter(roles: &'static [&'static str]) -> String {
    let settings = use_motion();
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with(roles, move |roles| {
            let config = Rc::clone(&settings.config);
            let mut rotation = None;

            match Typewriter::new(roles.iter().copied(), config.typewriter) {
                Ok(typewriter) if settings.reduced_motion => {
                    text.set(typewriter.roles()[0].clone());
                }
                Ok(typewriter) => {
                    log_event(
                        &config,
                        LogLevel::Debug,
                        "rotation_started",
                        json!({ "roles": typewriter.roles().len() }),
                    );
                    let frame_text = text.clone();
                    rotation = Some(Rotation::start(typewriter, BrowserScheduler, move |frame| {
                        frame_text.set(frame.text);
                    }));
                }
                Err(error) => {
                    log_event(
                        &config,
                        LogLevel::Info,
                        "typewriter_rejected",
                        json!({ "error": error.to_string() }),
                    );
                }
            }

            move || {
                if let Some(mut rotation) = rotation {
                    let last = rotation.frame();
                    rotation.stop();
                    log_event(
                        &config,
                        LogLevel::Debug,
                        "rotation_stopped",
                        json!({ "at": last.snapshot }),
                    );
                }
            }
        });
    }

    (*text).clone()
}

pub(crate) enum ShellAction {
    Scroll {
        progress: f64,
        bounds: Vec<SectionBounds>,
    },
    Pointer {
        x: f64,
        y: f64,
    },
    ToggleMenu,
    Navigate(SectionId),
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: ShellAction) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ShellAction::Scroll { progress, bounds } => next.on_scroll(progress, &bounds),
            ShellAction::Pointer { x, y } => next.on_pointer(x, y),
            ShellAction::ToggleMenu => next.toggle_menu(),
            ShellAction::Navigate(section) => next.navigate(section),
        }

        next.into()
    }
}

/// Window-level event sources, handed to the shell instead of looked up
/// ambiently.
#[derive(Clone, PartialEq)]
pub struct PageEvents {
    pub scroll: EventTarget,
    pub pointer: EventTarget,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    settings: MotionSettings,
    events: PageEvents,
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    active: SectionId,
    on_navigate: Callback<SectionId>,
    #[prop_or_default]
    stacked: bool,
}

#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <>
        { for SectionId::ALL.into_iter().map(|section| {
            let on_navigate = props.on_navigate.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(section));
            html! {
                <button
                    key={section.dom_id()}
                    type="button"
                    class={classes!(
                        "nav-link",
                        props.stacked.then_some("is-stacked"),
                        (props.active == section).then_some("is-active"),
                    )}
                    aria-current={(props.active == section).then_some("true")}
                    onclick={onclick}
                >
                    {section.label()}
                </button>
            }
        }) }
        </>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let shell = use_reducer(ShellState::default);
    let smooth = !props.settings.reduced_motion;

    {
        let dispatcher = shell.dispatcher();
        use_effect_with(props.events.clone(), move |events| {
            let scroll_dispatcher = dispatcher.clone();
            let scroll = EventListener::new(&events.scroll, "scroll", move |_| {
                scroll_dispatcher.dispatch(ShellAction::Scroll {
                    progress: measure_progress(),
                    bounds: measure_sections(),
                });
            });

            let pointer = EventListener::new(&events.pointer, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    dispatcher.dispatch(ShellAction::Pointer {
                        x: f64::from(event.client_x()),
                        y: f64::from(event.client_y()),
                    });
                }
            });

            move || {
                drop(scroll);
                drop(pointer);
            }
        });
    }

    let on_navigate = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |section: SectionId| {
            scroll_to_section(section, smooth);
            dispatcher.dispatch(ShellAction::Navigate(section));
        })
    };

    let on_toggle_menu = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ShellAction::ToggleMenu))
    };

    let on_back_to_top = Callback::from(move |_: MouseEvent| scroll_to(0.0, smooth));

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <ContextProvider<MotionSettings> context={props.settings.clone()}>
            <div class="page-shell">
                <div class="cursor-glow" style={shell.cursor_style()} aria-hidden="true" />
                <div class="progress-bar" style={shell.progress_style()} aria-hidden="true" />

                <nav class="site-nav" aria-label="Sections">
                    <div class="nav-inner">
                        <div class="brand">{PROFILE.name}</div>
                        <div class="nav-desktop">
                            <NavLinks active={shell.active} on_navigate={on_navigate.clone()} />
                        </div>
                        <button
                            class={classes!("menu-toggle", shell.menu_open.then_some("is-open"))}
                            type="button"
                            aria-label="Toggle navigation"
                            aria-expanded={shell.menu_open.to_string()}
                            onclick={on_toggle_menu}
                        >
                            <span class="menu-bar" />
                            <span class="menu-bar" />
                            <span class="menu-bar" />
                        </button>
                    </div>
                    <div class={classes!("nav-mobile", shell.menu_open.then_some("is-open"))}>
                        <NavLinks active={shell.active} on_navigate={on_navigate} stacked=true />
                    </div>
                </nav>

                <main id="content">
                    <section id={SectionId::Home.dom_id()} class="section section-hero">
                        <HeroSection pointer={shell.cursor} />
                    </section>
                    <section id={SectionId::Experience.dom_id()} class="section">
                        <ExperienceSection />
                    </section>
                    <section id={SectionId::Skills.dom_id()} class="section">
                        <SkillsSection />
                    </section>
                    <section id={SectionId::Projects.dom_id()} class="section">
                        <ProjectsSection />
                    </section>
                    <section id={SectionId::Education.dom_id()} class="section">
                        <EducationSection />
                    </section>
                </main>

                <button class="back-to-top" type="button" aria-label="Back to top" onclick={on_back_to_top}>
                    {"↑"}
                </button>

                <footer class="site-footer">
                    <div class="footer-inner">
                        <div class="brand">{PROFILE.name}</div>
                        <div class="footer-links">
                            <a href={PROFILE.mailto()}>{"Email"}</a>
                            <a href={PROFILE.tel()}>{"Phone"}</a>
                            <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                            <a href={PROFILE.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        </div>
                    </div>
                    <p class="footer-copy">{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
                </footer>
            </div>
        </ContextProvider<MotionSettings>>
    }
}

pub fn run() {
    let Some(win) = window() else {
        return;
    };
    let root = win
        .document()
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let config = AnimationConfig::from_lookup(|name| root.get_attribute(name));
    let reduced_motion = prefers_reduced_motion();
    log_event(
        &config,
        LogLevel::Info,
        "app_started",
        json!({ "reducedMotion": reduced_motion }),
    );
    log_event(&config, LogLevel::Debug, "config_loaded", config.as_fields());

    let events = PageEvents {
        scroll: win.clone().into(),
        pointer: win.into(),
    };
    let props = AppProps {
        settings: MotionSettings {
            config: Rc::new(config),
            reduced_motion,
        },
        events,
    };

    yew::Renderer::<App>::with_root_and_props(root, props).render();
}
