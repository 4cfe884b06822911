use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::content::{skills_in, SkillFilter, EDUCATION, EXPERIENCES, PROFILE, PROJECTS};
use crate::frontend::{scroll_to, use_motion, use_reveal, use_typewriter, viewport_size};
use crate::reveal::{reveal_style, Motion};
use crate::shell::{parallax_offset, Point, SectionId};

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2><span class="gradient-text">{props.title.clone()}</span></h2>
            <div class="heading-rule" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub pointer: Point,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), SectionId::Home);
    let settings = use_motion();
    let role_text = use_typewriter(PROFILE.roles);

    let (offset_x, offset_y) = if settings.reduced_motion {
        (0.0, 0.0)
    } else {
        parallax_offset(viewport_size(), (props.pointer.x, props.pointer.y))
    };
    let shape_style = |factor: f64| {
        format!(
            "transform: translate({:.2}px, {:.2}px);",
            offset_x * factor,
            offset_y * factor
        )
    };

    // Each row of the hero enters a little after the one above it.
    let entrance = |slot: u32| reveal_style(visible, settings.motion(Motion::rise(700).delayed(slot)));

    let smooth = !settings.reduced_motion;
    let on_scroll_down = Callback::from(move |_: MouseEvent| {
        let (_, height) = viewport_size();
        scroll_to(height, smooth);
    });

    html! {
        <div ref={node} class="hero">
            <div class="hero-shapes" aria-hidden="true">
                <div class="shape shape-blue" style={shape_style(2.0)} />
                <div class="shape shape-purple" style={shape_style(-3.0)} />
                <div class="shape shape-cyan" style={shape_style(1.5)} />
            </div>

            <div class="hero-content">
                <div style={entrance(0)}>
                    <p class="hero-greeting">{PROFILE.greeting}</p>
                </div>
                <div style={entrance(300)}>
                    <h1 class="hero-name"><span class="gradient-text">{PROFILE.name}</span></h1>
                </div>
                <div class="hero-role-line" style={entrance(500)}>
                    <h2 class="hero-role" aria-live="polite">
                        {role_text}
                        <span class="caret" aria-hidden="true">{"|"}</span>
                    </h2>
                </div>
                <div class="hero-bio" style={entrance(700)}>
                    <p>{PROFILE.bio}</p>
                </div>
                <div class="hero-actions" style={entrance(900)}>
                    <a class="button button-primary" href={PROFILE.mailto()}>{"Contact Me"}</a>
                    <a class="button button-outline" href={PROFILE.resume}>{"Download CV"}</a>
                </div>
                <div class="hero-socials" style={entrance(1000)}>
                    <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href={PROFILE.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href={PROFILE.mailto()}>{"Email"}</a>
                    <a href={PROFILE.tel()}>{"Phone"}</a>
                </div>
            </div>

            <button class="scroll-down" type="button" onclick={on_scroll_down}>
                <span>{"Scroll Down"}</span>
                <span aria-hidden="true">{"⌄"}</span>
            </button>
        </div>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), SectionId::Experience);
    let settings = use_motion();

    html! {
        <div ref={node} class="container">
            <SectionHeading title="Experience" />
            <div class="timeline">
                <div class="timeline-line" aria-hidden="true" />
                { for EXPERIENCES.iter().enumerate().map(|(index, experience)| {
                    let motion = settings.motion(Motion::rise(700).delayed(settings.config.stagger_ms(index, 200, 300)));
                    let side = if index % 2 == 0 { "is-left" } else { "is-right" };
                    html! {
                        <div key={index} class={classes!("timeline-item", side)} style={reveal_style(visible, motion)}>
                            <article class="card timeline-card">
                                <p class="timeline-period">{experience.period}</p>
                                <h3>{experience.title}</h3>
                                <p class="muted">{experience.company}</p>
                                { for experience.description.iter().map(|line| html! { <p class="timeline-text">{*line}</p> }) }
                                <div class="tag-list">
                                    { for experience.skills.iter().map(|skill| html! { <span class="tag">{*skill}</span> }) }
                                </div>
                            </article>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), SectionId::Skills);
    let settings = use_motion();
    let filter = use_state(SkillFilter::default);
    let hovered = use_state(|| None::<&'static str>);
    let glow = use_state(Point::default);

    let onmousemove = {
        let node = node.clone();
        let glow = glow.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let bounds = element.get_bounding_client_rect();
                glow.set(Point {
                    x: f64::from(event.client_x()) - bounds.left(),
                    y: f64::from(event.client_y()) - bounds.top(),
                });
            }
        })
    };

    let glow_style = format!(
        "left: {:.2}px; top: {:.2}px; transform: translate(-50%, -50%);",
        glow.x, glow.y
    );

    html! {
        <div ref={node} class="container skills" onmousemove={onmousemove}>
            <div class="skills-glow" style={glow_style} aria-hidden="true" />
            <SectionHeading title="Technical Skills" />

            <div class="filter-bar" role="toolbar" aria-label="Skill categories">
                { for SkillFilter::options().enumerate().map(|(index, option)| {
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| filter.set(option))
                    };
                    let motion = settings.motion(Motion::rise(500).delayed(settings.config.stagger_ms(index, 100, 0)));
                    html! {
                        <button
                            key={option.label()}
                            type="button"
                            class={classes!("filter-chip", (*filter == option).then_some("is-active"))}
                            aria-pressed={(*filter == option).to_string()}
                            style={reveal_style(visible, motion)}
                            onclick={onclick}
                        >
                            <span class="filter-emoji" aria-hidden="true">{option.emoji()}</span>
                            {option.label()}
                        </button>
                    }
                }) }
            </div>

            <div class="skills-grid">
                { for skills_in(*filter).into_iter().enumerate().map(|(index, skill)| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(skill.name)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    let card_motion = settings.motion(Motion::rise(500).delayed(settings.config.stagger_ms(index, 50, 500)));
                    let bar_delay = if settings.reduced_motion { 0 } else { settings.config.stagger_ms(index, 100, 800) };
                    let bar_width = if visible { skill.proficiency() } else { 0 };
                    let bar_style = format!(
                        "width: {bar_width}%; transition: width 1000ms ease-in-out; transition-delay: {bar_delay}ms;"
                    );
                    let label = (*hovered == Some(skill.name)).then(|| format!("{}%", skill.proficiency()));

                    html! {
                        <div
                            key={format!("{}-{index}", skill.name)}
                            class="card skill-card"
                            style={reveal_style(visible, card_motion)}
                            onmouseenter={onmouseenter}
                            onmouseleave={onmouseleave}
                        >
                            <h3>{skill.name}</h3>
                            <div class="skill-track">
                                <div class="skill-bar" style={bar_style} />
                            </div>
                            <div class="skill-level">{label.unwrap_or_default()}</div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), SectionId::Projects);
    let settings = use_motion();
    let active = use_state(|| None::<usize>);

    {
        let active = active.clone();
        use_effect_with(visible, move |visible| {
            if *visible && active.is_none() && !PROJECTS.is_empty() {
                active.set(Some(0));
            }
            || ()
        });
    }

    let detail_motion = settings.motion(Motion::rise(500).delayed(300));

    html! {
        <div ref={node} class="container">
            <SectionHeading title="Projects" />
            <div class="projects">
                <div class="project-list">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| {
                        let selected = *active == Some(index);
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(Some(index)))
                        };
                        let motion = settings.motion(Motion::slide(500).delayed(settings.config.stagger_ms(index, 100, 0)));
                        html! {
                            <button
                                key={project.title}
                                type="button"
                                class={classes!("project-tab", selected.then_some("is-active"))}
                                aria-pressed={selected.to_string()}
                                style={reveal_style(visible, motion)}
                                onclick={onclick}
                            >
                                <h3>{project.title}</h3>
                                <p>{if selected { "Currently viewing".to_string() } else { project.tech_summary() }}</p>
                            </button>
                        }
                    }) }
                </div>

                <div class="project-detail">
                    { for (*active).and_then(|index| PROJECTS.get(index)).map(|project| html! {
                        <article key={project.title} class="card project-card" style={reveal_style(visible, detail_motion)}>
                            <div class="project-media">
                                <img src={project.image} alt={project.title} loading="lazy" />
                                <div class="tag-list tag-overlay">
                                    { for project.technologies.iter().map(|tech| html! { <span class="tag">{*tech}</span> }) }
                                </div>
                            </div>
                            <div class="project-body">
                                <h3>{project.title}</h3>
                                <p class="muted">{project.summary}</p>
                                <p>{project.details}</p>
                                <div class="project-links">
                                    <a class="button button-primary" href={project.demo_link} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a>
                                    <a class="button button-muted" href={project.code_link} target="_blank" rel="noopener noreferrer">{"Source Code"}</a>
                                </div>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(EducationSection)]
pub fn education_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), SectionId::Education);
    let settings = use_motion();
    let card = |delay: u32| reveal_style(visible, settings.motion(Motion::rise(700).delayed(delay)));

    html! {
        <div ref={node} class="container narrow">
            <SectionHeading title="Education & Achievements" />

            <article class="card education-card" style={card(0)}>
                <h3>{EDUCATION.degree}</h3>
                <p class="education-institution">{EDUCATION.institution}</p>
                <p class="muted">{EDUCATION.period}</p>
                <div class="cgpa">
                    <span class="muted">{"CGPA: "}</span>
                    <strong>{EDUCATION.cgpa}</strong>
                </div>
                <h4>{"Key Achievements"}</h4>
                <ul class="achievements">
                    { for EDUCATION.achievements.iter().enumerate().map(|(index, achievement)| {
                        let motion = settings.motion(Motion::slide(500).delayed(settings.config.stagger_ms(index, 200, 300)));
                        html! { <li key={index} style={reveal_style(visible, motion)}>{*achievement}</li> }
                    }) }
                </ul>
            </article>

            <article class="card" style={card(400)}>
                <h3>{"Certifications & Honors"}</h3>
                <div class="certifications">
                    { for EDUCATION.certifications.iter().enumerate().map(|(index, certification)| {
                        let motion = settings.motion(Motion::rise(500).delayed(settings.config.stagger_ms(index, 200, 600)));
                        html! {
                            <div key={index} class="certification" style={reveal_style(visible, motion)}>
                                <h4>{certification.name}</h4>
                                <p class="muted">{format!("{} • {}", certification.issuer, certification.year)}</p>
                            </div>
                        }
                    }) }
                </div>
            </article>

            <div class="contact-cta" style={card(800)}>
                <h3>{"Let's Work Together"}</h3>
                <p>{"Interested in discussing a project or potential opportunity? I'm always open to new challenges and collaborations."}</p>
                <a class="button button-gradient" href={PROFILE.mailto()}>{"Get In Touch"}</a>
            </div>
        </div>
    }
}
