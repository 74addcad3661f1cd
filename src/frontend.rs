use crate::{
    config::{data_attribute_name, SiteConfig},
    contact::{ContactField, ContactStore, SubmissionStatus},
    content::{
        parse_project_feed, tagline_word_delay_ms, ExperienceEntry, ProjectCard, SkillCategory,
        Stat, ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS, CARD_TECHNOLOGY_LIMIT, EXPERIENCE, GITHUB_URL,
        HERO_TECH, NAV_LINKS, OWNER_NAME, OWNER_ROLE, SKILL_CATEGORIES, SOCIAL_LINKS, STATS,
        TAGLINE_WORDS,
    },
    counter::CountUp,
    logging::{log_event, LogLevel},
    pointer::{PointerPosition, PointerSource, PointerTracker, GLOW_CORE_RADIUS, GLOW_RING_RADIUS},
    runtime::{Scheduler, Subscription, SystemClock},
    scroll::{ScrollMetrics, ScrollProgressMeter, ScrollSource},
    storage::{KeyValueStore, MemoryStore, StorageError},
    typewriter::{Typewriter, TypewriterOptions},
    visibility::{IntersectionSource, VisibilityOptions, VisibilityWatch},
};
use chrono::Datelike;
use gloo_net::http::Request;
use js_sys::{Array, Function};
use serde_json::json;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Storage,
};
use yew::prelude::*;

const MOUNT_POINT_ID: &str = "app";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

struct BrowserStorage(Storage);

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected {
                key: key.to_string(),
            })
    }
}

fn submission_backend() -> Rc<dyn KeyValueStore> {
    match local_storage() {
        Some(storage) => Rc::new(BrowserStorage(storage)),
        None => Rc::new(MemoryStore::default()),
    }
}

#[derive(Clone, Copy, Default)]
struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Subscription {
        let Some(win) = window() else {
            return Subscription::new(|| ());
        };

        let closure: Closure<dyn FnMut()> = Closure::once(callback);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let Ok(handle) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        ) else {
            return Subscription::new(|| ());
        };

        Subscription::new(move || {
            win.clear_timeout_with_handle(handle);
            drop(closure);
        })
    }
}

struct ViewportIntersection;

impl IntersectionSource for ViewportIntersection {
    type Region = Element;

    fn attach(
        &self,
        region: &Element,
        options: &VisibilityOptions,
        on_change: Box<dyn Fn(bool)>,
    ) -> Subscription {
        let on_change: Rc<dyn Fn(bool)> = Rc::from(on_change);
        let listener = Rc::clone(&on_change);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let latest = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .last();

                if let Some(entry) = latest {
                    listener(entry.is_intersecting());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            // No observer support: show the content rather than hide it forever.
            on_change(true);
            return Subscription::new(|| ());
        };

        observer.observe(region);
        Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }
}

struct WindowEvents;

fn listen_on_window<T>(event: &'static str, closure: Closure<T>) -> Subscription
where
    T: ?Sized + 'static,
{
    let Some(win) = window() else {
        return Subscription::new(|| ());
    };

    let function: &Function = closure.as_ref().unchecked_ref();
    if win.add_event_listener_with_callback(event, function).is_err() {
        return Subscription::new(|| ());
    }

    Subscription::new(move || {
        let _ = win.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}

fn scroll_metrics() -> Option<ScrollMetrics> {
    let win = window()?;
    let document_height = win.document()?.document_element()?.scroll_height();
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    let scroll_y = win.scroll_y().ok()?;

    Some(ScrollMetrics {
        scroll_y,
        document_height: f64::from(document_height),
        viewport_height,
    })
}

impl PointerSource for WindowEvents {
    fn on_pointer_move(&self, listener: Box<dyn Fn(PointerPosition)>) -> Subscription {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            listener(PointerPosition::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ));
        });
        listen_on_window("mousemove", closure)
    }
}

impl ScrollSource for WindowEvents {
    fn on_scroll(&self, listener: Box<dyn Fn(ScrollMetrics)>) -> Subscription {
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(metrics) = scroll_metrics() {
                listener(metrics);
            }
        });
        listen_on_window("scroll", closure)
    }
}

fn mount_point() -> Option<Element> {
    window()?.document()?.get_element_by_id(MOUNT_POINT_ID)
}

fn load_site_config() -> SiteConfig {
    let mount = mount_point();
    SiteConfig::from_lookup(|key| mount.as_ref()?.get_attribute(&data_attribute_name(key)))
}

fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Debug, Error)]
enum FeedError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid feed: {0}")]
    Decode(#[from] serde_json::Error),
}

async fn fetch_project_feed(url: &str) -> Result<Vec<ProjectCard>, FeedError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }

    let raw = response.text().await?;
    Ok(parse_project_feed(&raw)?)
}

#[hook]
fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[hook]
fn use_visibility(options: VisibilityOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with(options, move |options| {
            let watch = node.cast::<Element>().map(|element| {
                VisibilityWatch::attach(
                    &ViewportIntersection,
                    &element,
                    options,
                    move |is_visible| visible.set(is_visible),
                )
            });
            move || drop(watch)
        });
    }

    (node, *visible)
}

fn reveal_once(threshold: f64) -> VisibilityOptions {
    VisibilityOptions::default()
        .threshold(threshold)
        .trigger_once(true)
}

#[hook]
fn use_typewriter(text: AttrValue, speed_ms: u32, start_delay_ms: u32) -> String {
    let displayed = use_state_eq(String::new);

    {
        let displayed = displayed.clone();
        use_effect_with(
            (text, speed_ms, start_delay_ms),
            move |(text, speed_ms, start_delay_ms)| {
                let options = TypewriterOptions::new(text.to_string())
                    .speed(*speed_ms)
                    .start_delay(*start_delay_ms);
                let effect = Typewriter::start(Rc::new(BrowserScheduler), options);
                displayed.set(effect.displayed());
                effect.on_change(move |text| displayed.set(text.to_string()));
                move || drop(effect)
            },
        );
    }

    (*displayed).clone()
}

#[hook]
fn use_pointer_position() -> PointerPosition {
    let position = use_state_eq(PointerPosition::default);

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let tracker = PointerTracker::attach(&WindowEvents, move |next| position.set(next));
            move || drop(tracker)
        });
    }

    *position
}

#[hook]
fn use_scroll_progress() -> f64 {
    let percent = use_state_eq(|| 0.0_f64);

    {
        let percent = percent.clone();
        use_effect_with((), move |_| {
            let meter = ScrollProgressMeter::attach(&WindowEvents, move |next| percent.set(next));
            move || drop(meter)
        });
    }

    *percent
}

#[hook]
fn use_count_up(target: u32, active: bool, tick_ms: u32) -> u32 {
    let value = use_state_eq(|| 0_u32);

    {
        let value = value.clone();
        use_effect_with((target, active, tick_ms), move |(target, active, tick_ms)| {
            let counter = if *active {
                let counter = CountUp::start(Rc::new(BrowserScheduler), *target, *tick_ms);
                counter.on_change(move |next| value.set(next));
                Some(counter)
            } else {
                None
            };
            move || drop(counter)
        });
    }

    *value
}

#[function_component(ScrollProgressBar)]
fn scroll_progress_bar() -> Html {
    let percent = use_scroll_progress();
    let style = format!("width: {percent:.2}%;");

    html! {
        <div class="scroll-progress" style={style} aria-hidden="true" />
    }
}

#[function_component(CursorGlow)]
fn cursor_glow() -> Html {
    let position = use_pointer_position();
    let (core_x, core_y) = position.centered(GLOW_CORE_RADIUS);
    let (ring_x, ring_y) = position.centered(GLOW_RING_RADIUS);

    html! {
        <div class="cursor-glow" aria-hidden="true">
            <div
                class="cursor-glow-core"
                style={format!("transform: translate({core_x:.2}px, {core_y:.2}px);")}
            />
            <div
                class="cursor-glow-ring"
                style={format!("transform: translate({ring_x:.2}px, {ring_y:.2}px);")}
            />
        </div>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let is_open = use_state(|| false);

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let on_navigate = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    html! {
        <nav class="site-nav" aria-label="Primary">
            <a class="site-nav-logo" href="#">{OWNER_NAME}</a>
            <button
                class="site-nav-toggle"
                type="button"
                aria-expanded={(*is_open).to_string()}
                aria-controls="site-nav-links"
                onclick={on_toggle}
            >
                <span aria-hidden="true">{if *is_open { "✕" } else { "☰" }}</span>
                <span class="sr-only">{"Toggle navigation"}</span>
            </button>
            <ul
                id="site-nav-links"
                class={classes!("site-nav-links", is_open.then_some("is-open"))}
            >
                { for NAV_LINKS.iter().map(|link| html! {
                    <li key={link.href}>
                        <a href={link.href} onclick={on_navigate.clone()}>{link.label}</a>
                    </li>
                }) }
            </ul>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let config = use_site_config();
    let title = use_typewriter(
        AttrValue::from(OWNER_NAME),
        config.hero_typewriter_speed_ms,
        config.hero_typewriter_delay_ms,
    );

    html! {
        <header class="hero" aria-labelledby="hero-heading">
            <p class="hero-badge">{format!("Welcome to {OWNER_NAME}'s Portfolio")}</p>
            <h1 id="hero-heading" class="hero-title" aria-label={OWNER_NAME}>
                <span aria-hidden="true">{title}</span>
                <span class="hero-caret" aria-hidden="true">{"|"}</span>
            </h1>
            <p class="hero-role">{OWNER_ROLE}</p>
            <p class="hero-tagline">
                { for TAGLINE_WORDS.iter().enumerate().map(|(index, word)| html! {
                    <span
                        class="hero-tagline-word"
                        style={format!("animation-delay: {}ms;", tagline_word_delay_ms(index))}
                    >
                        {*word}{" "}
                    </span>
                }) }
            </p>
            <ul class="chip-list">
                { for HERO_TECH.iter().map(|tech| html! { <li class="chip">{*tech}</li> }) }
            </ul>
            <div class="hero-actions">
                <a class="button button-primary" href="#contact">{"Let's Connect"}</a>
                <a class="button button-outline" href="#projects">{"View My Work"}</a>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: Stat,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let config = use_site_config();
    let (node, visible) = use_visibility(reveal_once(0.5));
    let value = use_count_up(props.stat.target, visible, config.counter_tick_ms);

    html! {
        <div ref={node} class={classes!("stat", visible.then_some("is-visible"))}>
            <p class="stat-value">{format!("{value}+")}</p>
            <p class="stat-label">{props.stat.label}</p>
        </div>
    }
}

#[function_component(About)]
fn about() -> Html {
    let (node, visible) = use_visibility(reveal_once(0.2));

    html! {
        <section
            id="about"
            ref={node}
            class={classes!("section-block", visible.then_some("is-visible"))}
            aria-labelledby="about-heading"
        >
            <h2 id="about-heading">{"About Me"}</h2>
            { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
            <ul class="highlight-list">
                { for ABOUT_HIGHLIGHTS.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
            <div class="stat-row">
                { for STATS.iter().map(|stat| html! {
                    <StatCounter key={stat.label} stat={*stat} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardViewProps {
    project: ProjectCard,
    hovered: bool,
    on_hover: Callback<Option<String>>,
}

#[function_component(ProjectCardView)]
fn project_card_view(props: &ProjectCardViewProps) -> Html {
    let project = &props.project;
    let (badges, hidden) = project.technology_badges(CARD_TECHNOLOGY_LIMIT);

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(id.clone())))
    };

    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    html! {
        <article
            class={classes!("project-card", props.hovered.then_some("is-hovered"))}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <p class="project-year">{project.year.clone()}</p>
            <h3>{project.title.clone()}</h3>
            <p class="muted" title={project.description.clone()}>
                {project.short_description.clone()}
            </p>
            <ul class="chip-list">
                { for badges.iter().map(|tech| html! {
                    <li class="chip" key={tech.clone()}>{tech.clone()}</li>
                }) }
                if hidden > 0 {
                    <li class="chip">{format!("+{hidden}")}</li>
                }
            </ul>
        </article>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let config = use_site_config();
    let (node, visible) = use_visibility(reveal_once(0.1));
    let projects = use_state(Vec::<ProjectCard>::new);
    let hovered = use_state(|| None::<String>);

    {
        let projects = projects.clone();
        let feed_url = config.projects_feed_url.clone();
        let log_level = config.log_level;
        use_effect_with(feed_url, move |feed_url| {
            let feed_url = feed_url.clone();
            spawn_local(async move {
                match fetch_project_feed(&feed_url).await {
                    Ok(feed) => projects.set(feed),
                    Err(error) => log_event(
                        log_level,
                        LogLevel::Warn,
                        "project_feed_failed",
                        json!({ "url": feed_url, "error": error.to_string() }),
                    ),
                }
            });
            || ()
        });
    }

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |id: Option<String>| hovered.set(id))
    };

    html! {
        <section
            id="projects"
            ref={node}
            class={classes!("section-block", visible.then_some("is-visible"))}
            aria-labelledby="projects-heading"
        >
            <h2 id="projects-heading">{"Featured Projects"}</h2>
            <p class="muted">
                {"A selection of enterprise applications and systems I've architected and delivered"}
            </p>
            <div class="project-grid">
                { for projects.iter().map(|project| html! {
                    <ProjectCardView
                        key={project.id.clone()}
                        project={project.clone()}
                        hovered={hovered.as_deref() == Some(project.id.as_str())}
                        on_hover={on_hover.clone()}
                    />
                }) }
            </div>
            <a
                class="button button-outline"
                href={GITHUB_URL}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"View All Projects on GitHub"}
            </a>
        </section>
    }
}

fn skill_category(
    category: &SkillCategory,
    hovered: &UseStateHandle<Option<&'static str>>,
) -> Html {
    let accent = format!("accent-{}", category.accent);

    html! {
        <div class={classes!("skill-card", accent)} key={category.name}>
            <h3>{category.name}</h3>
            <ul class="chip-list">
                { for category.skills.iter().map(|skill| {
                    let skill: &'static str = *skill;
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(skill)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <li
                            class={classes!(
                                "chip",
                                (**hovered == Some(skill)).then_some("is-hovered")
                            )}
                            onmouseenter={onmouseenter}
                            onmouseleave={onmouseleave}
                        >
                            {skill}
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    let (node, visible) = use_visibility(reveal_once(0.1));
    let hovered = use_state(|| None::<&'static str>);

    html! {
        <section
            id="skills"
            ref={node}
            class={classes!("section-block", visible.then_some("is-visible"))}
            aria-labelledby="skills-heading"
        >
            <h2 id="skills-heading">{"Skills & Expertise"}</h2>
            <div class="skill-grid">
                { for SKILL_CATEGORIES.iter().map(|category| skill_category(category, &hovered)) }
            </div>
        </section>
    }
}

fn experience_entry(entry: &ExperienceEntry) -> Html {
    html! {
        <li class="timeline-entry" key={entry.title}>
            <h3>{entry.title}</h3>
            <p class="muted">
                {format!("{} · {} · {}", entry.company, entry.duration, entry.tenure)}
            </p>
            <p>{entry.description}</p>
            <ul class="highlight-list">
                { for entry.highlights.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        </li>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    let (node, visible) = use_visibility(reveal_once(0.1));

    html! {
        <section
            id="experience"
            ref={node}
            class={classes!("section-block", visible.then_some("is-visible"))}
            aria-labelledby="experience-heading"
        >
            <h2 id="experience-heading">{"Experience"}</h2>
            <ol class="timeline">
                { for EXPERIENCE.iter().map(experience_entry) }
            </ol>
        </section>
    }
}

fn field_input(store: &Rc<ContactStore>, field: ContactField) -> Callback<InputEvent> {
    let store = Rc::clone(store);
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            });

        if let Some(value) = value {
            store.update_field(field, value);
        }
    })
}

#[function_component(Contact)]
fn contact() -> Html {
    let config = use_site_config();
    let (node, visible) = use_visibility(reveal_once(0.2));
    let trigger = use_force_update();
    let store = use_memo((), move |_| {
        let store = ContactStore::new(
            submission_backend(),
            Rc::new(BrowserScheduler),
            Rc::new(SystemClock),
            config.contact_settings(),
        );
        store.subscribe(move || trigger.force_update());
        store
    });

    let onsubmit = {
        let store = Rc::clone(&store);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            store.submit();
        })
    };

    let form = store.form();
    let status = store.status();
    let message = store
        .message()
        .filter(|_| matches!(status, SubmissionStatus::Success | SubmissionStatus::Error));
    let submitting = status == SubmissionStatus::Submitting;

    html! {
        <section
            id="contact"
            ref={node}
            class={classes!("section-block", visible.then_some("is-visible"))}
            aria-labelledby="contact-heading"
        >
            <h2 id="contact-heading">{"Get In Touch"}</h2>
            <p class="muted">
                {"Have a project or opportunity? Let's connect and discuss how we can work together."}
            </p>
            <ul class="contact-links">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <li key={link.label}>
                        <a class="link" href={link.href} target="_blank" rel="noopener noreferrer">
                            <span class="muted">{link.label}</span>{" "}{link.handle}
                        </a>
                    </li>
                }) }
            </ul>
            <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                <label>
                    {"Name"}
                    <input type="text" name="name" placeholder="Your name"
                        value={form.name.clone()}
                        oninput={field_input(&store, ContactField::Name)} />
                </label>
                <label>
                    {"Email"}
                    <input type="email" name="email" placeholder="your@email.com"
                        value={form.email.clone()}
                        oninput={field_input(&store, ContactField::Email)} />
                </label>
                <label>
                    {"Subject"}
                    <input type="text" name="subject" placeholder="Project inquiry"
                        value={form.subject.clone()}
                        oninput={field_input(&store, ContactField::Subject)} />
                </label>
                <label>
                    {"Message"}
                    <textarea name="message" rows="5"
                        placeholder="Tell me about your project or opportunity..."
                        value={form.message.clone()}
                        oninput={field_input(&store, ContactField::Message)} />
                </label>
                if let Some(message) = message {
                    <p
                        class={classes!("form-status", format!("form-status-{}", status.as_str()))}
                        role="status"
                    >
                        {message}
                    </p>
                }
                <button class="button button-primary" type="submit" disabled={submitting}>
                    {if submitting { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Utc::now().year();
    let on_back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <nav aria-label="Footer">
                <ul class="row-list">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li key={link.href}><a href={link.href}>{link.label}</a></li>
                    }) }
                </ul>
            </nav>
            <ul class="row-list">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <li key={link.label}>
                        <a class="link" href={link.href} target="_blank" rel="noopener noreferrer">
                            {link.label}
                        </a>
                    </li>
                }) }
            </ul>
            <p class="muted">{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
            <button class="back-to-top" type="button" onclick={on_back_to_top}>
                <span aria-hidden="true">{"↑"}</span>
                <span class="sr-only">{"Back to top"}</span>
            </button>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_site_config());

    {
        let config = Rc::clone(&config);
        use_effect_with((), move |_| {
            log_event(
                config.log_level,
                LogLevel::Debug,
                "site_config_loaded",
                json!({
                    "success_reset_ms": config.success_reset_ms,
                    "error_reset_ms": config.error_reset_ms,
                    "submissions_key": config.submissions_key,
                    "projects_feed_url": config.projects_feed_url,
                }),
            );
            || ()
        });
    }

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <ScrollProgressBar />
            <CursorGlow />
            <Navbar />
            <main id="content">
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Experience />
                <Contact />
            </main>
            <Footer />
        </ContextProvider<SiteConfig>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(mount_point().expect("missing #app mount point")).render();
}
