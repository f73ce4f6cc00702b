use leptos::{either::Either, prelude::*};

use super::{contact::ContactSection, nav::NavBar};
use crate::{
    fallback::Fallback,
    portfolio::{PortfolioData, Profile, ProfileText, Project, SkillGroups, SocialLink},
    section::Section,
    social::SocialIcon,
};

/// The whole landing page. `initial_data` is only read, never written back.
#[component]
pub fn Portfolio(initial_data: PortfolioData) -> impl IntoView {
    let PortfolioData {
        profile,
        social_links,
        projects,
        skills,
    } = initial_data;
    let brand = ProfileText(profile.as_ref()).name().to_string();

    view! {
        <div class="min-h-screen bg-gray-50">
            <NavBar brand=brand.clone() />
            <Hero profile social_links />
            <ProjectsSection projects />
            <SkillsSection skills />
            <ContactSection />
            <Footer name=brand />
        </div>
    }
}

#[component]
fn Hero(profile: Option<Profile>, social_links: Vec<SocialLink>) -> impl IntoView {
    let text = ProfileText(profile.as_ref());
    let avatar = match text.avatar_url() {
        Some(src) => Either::Left(view! {
            <img
                src=src.to_string()
                alt=text.raw_name().unwrap_or_default().to_string()
                class="w-32 h-32 mx-auto mb-6 rounded-full object-cover"
            />
        }),
        None => Either::Right(view! {
            <div class="w-32 h-32 mx-auto mb-6 bg-gradient-to-br from-blue-500 to-indigo-600 rounded-full flex items-center justify-center text-white text-4xl font-bold">
                {text.avatar_initial()}
            </div>
        }),
    };

    view! {
        <section
            id=Section::About.anchor()
            class="pt-32 pb-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-blue-50 to-indigo-100"
        >
            <div class="max-w-6xl mx-auto text-center">
                {avatar}
                <h1 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4">
                    {text.title().to_string()}
                </h1>
                <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                    {text.bio().to_string()}
                </p>
                <SocialLinks links=social_links />
            </div>
        </section>
    }
}

#[component]
fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    (!links.is_empty()).then(|| {
        view! {
            <div class="flex justify-center space-x-4">
                {links
                    .into_iter()
                    .map(|link| {
                        let icon = SocialIcon::for_platform(&link.platform);
                        view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.platform
                                class="social-link p-3 bg-gray-800 text-white rounded-full hover:bg-gray-700 transition"
                            >
                                <i class=icon.class()></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}

#[component]
pub(super) fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let body = if projects.is_empty() {
        Either::Left(view! {
            <p class="text-center text-gray-600">{Fallback::NoProjects.text()}</p>
        })
    } else {
        Either::Right(view! {
            <div class="space-y-16">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        })
    };

    view! {
        <section id=Section::Projects.anchor() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">
                    "Projetos em Destaque"
                </h2>
                {body}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let challenges = project.challenges().map(str::to_string);
    let demo_url = project.demo_url().map(str::to_string);
    let github_url = project.github_url().map(str::to_string);
    let Project {
        title,
        description,
        image_url,
        highlights,
        technologies,
        ..
    } = project;

    view! {
        <article class="project-card bg-white rounded-lg shadow-lg overflow-hidden">
            <div class="grid md:grid-cols-2 gap-6">
                <div class="relative h-64 md:h-auto">
                    <img src=image_url alt=title.clone() class="w-full h-full object-cover" />
                </div>
                <div class="p-6">
                    <h3 class="text-2xl font-bold text-gray-900 mb-3">{title}</h3>
                    <p class="text-gray-600 mb-4">{description}</p>
                    {(!highlights.is_empty())
                        .then(|| {
                            view! {
                                <div class="mb-4">
                                    <h4 class="font-semibold text-gray-900 mb-2">"Destaques:"</h4>
                                    <ul class="list-disc list-inside text-gray-600 space-y-1">
                                        {highlights
                                            .into_iter()
                                            .map(|h| view! { <li class="text-sm">{h.highlight}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })}
                    {challenges
                        .map(|challenges| {
                            view! {
                                <div class="mb-4">
                                    <h4 class="font-semibold text-gray-900 mb-2">
                                        "Desafio técnico:"
                                    </h4>
                                    <p class="text-sm text-gray-600">{challenges}</p>
                                </div>
                            }
                        })}
                    {(!technologies.is_empty())
                        .then(|| {
                            view! {
                                <div class="flex flex-wrap gap-2 mb-4">
                                    {technologies
                                        .into_iter()
                                        .map(|tech| {
                                            view! {
                                                <span
                                                    class="px-3 py-1 text-sm rounded-full text-white"
                                                    style:background-color=tech.color.unwrap_or_default()
                                                >
                                                    {tech.name}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })}
                    <div class="flex space-x-4">
                        {demo_url
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center space-x-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition"
                                    >
                                        <i class="extra-link"></i>
                                        <span>"Ver Demo"</span>
                                    </a>
                                }
                            })}
                        {github_url
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center space-x-2 px-4 py-2 bg-gray-800 text-white rounded-lg hover:bg-gray-700 transition"
                                    >
                                        <i class=SocialIcon::Github.class()></i>
                                        <span>"GitHub"</span>
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </article>
    }
}

#[component]
pub(super) fn SkillsSection(skills: SkillGroups) -> impl IntoView {
    let body = if skills.is_empty() {
        Either::Left(view! {
            <p class="text-center text-gray-600">{Fallback::NoSkills.text()}</p>
        })
    } else {
        Either::Right(view! {
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                {skills
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div class="skill-category bg-gray-50 rounded-lg p-6">
                                <h3 class="text-xl font-bold text-gray-900 mb-4">{category.name}</h3>
                                <div class="space-y-2">
                                    {category
                                        .skills
                                        .into_iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="px-3 py-2 bg-white rounded border border-gray-200 text-gray-700 text-sm">
                                                    {skill.name}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        })
    };

    view! {
        <section id=Section::Skills.anchor() class="py-20 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">
                    "Habilidades Técnicas"
                </h2>
                {body}
            </div>
        </section>
    }
}

#[component]
fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-8 px-4">
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-gray-400">
                    {format!("© {} {name}. Desenvolvido com Rust e Leptos", env!("BUILD_YEAR"))}
                </p>
            </div>
        </footer>
    }
}
