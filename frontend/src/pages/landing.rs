use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom;

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "bi-code-slash",
        title: "Web Development",
        text: "Fast, accessible websites built on modern, maintainable foundations.",
    },
    Service {
        icon: "bi-phone",
        title: "App Development",
        text: "Mobile and desktop applications that feel at home on every device.",
    },
    Service {
        icon: "bi-palette",
        title: "Design",
        text: "Clean interfaces and brand identities that are easy to recognise.",
    },
];

const STATISTICS: [(u32, &str); 4] = [
    (150, "Projects Completed"),
    (98, "Happy Clients (%)"),
    (5, "Years Experience"),
    (24, "Support Hours"),
];

struct Project {
    title: &'static str,
    category: &'static str,
    image: &'static str,
    summary: &'static str,
    detail: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "E-commerce Website",
        category: "web",
        image: "https://picsum.photos/seed/agency-web/600/400",
        summary: "Online store with secure checkout",
        detail: "A complete storefront with catalogue search, cart and payment integration.",
    },
    Project {
        title: "Fitness Tracker App",
        category: "app",
        image: "https://picsum.photos/seed/agency-app/600/400",
        summary: "Workout logging on the go",
        detail: "A mobile application for planning workouts and tracking progress over time.",
    },
    Project {
        title: "Brand Identity",
        category: "design",
        image: "https://picsum.photos/seed/agency-design/600/400",
        summary: "Logo and visual language",
        detail: "A full identity package covering logo, palette, typography and print material.",
    },
];

const FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("web", "Web"),
    ("app", "App"),
    ("design", "Design"),
];

fn modal_id(index: usize) -> String {
    format!("portfolioModal{}", index + 1)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Behavior is wired against the rendered DOM once, and torn down with the page
    {
        use_effect_with_deps(
            move |_| {
                let mounted = match dom::mount(SiteConfig::default()) {
                    Ok(mounted) => Some(mounted),
                    Err(e) => {
                        log::warn!("Page behavior not mounted: {}", e);
                        None
                    }
                };
                move || drop(mounted)
            },
            (),
        );
    }

    let services = SERVICES.iter().map(|service| {
        html! {
            <div class="col-md-4 mb-4">
                <div class="card h-100 text-center">
                    <div class="card-body">
                        <i class={classes!("bi", service.icon, "service-icon")}></i>
                        <h3 class="card-title">{service.title}</h3>
                        <p class="card-text">{service.text}</p>
                    </div>
                </div>
            </div>
        }
    });

    let statistics = STATISTICS.iter().map(|(target, label)| {
        html! {
            <div class="col-6 col-md-3 text-center">
                <div class="statistic-number" data-target={target.to_string()}>{"0"}</div>
                <p class="statistic-label">{*label}</p>
            </div>
        }
    });

    let filters = FILTERS.iter().enumerate().map(|(index, (value, label))| {
        let class = classes!("btn", "btn-outline-primary", "filter-btn", (index == 0).then_some("active"));
        html! {
            <button type="button" class={class} data-filter={*value}>{*label}</button>
        }
    });

    let items = PROJECTS.iter().enumerate().map(|(index, project)| {
        html! {
            <div class="col-md-4 mb-4 portfolio-item show"
                data-category={project.category}
                data-modal={modal_id(index)}>
                <div class="portfolio-card">
                    <img src={project.image} class="img-fluid" alt={project.title} />
                    <div class="portfolio-caption">
                        <h4>{project.title}</h4>
                        <p>{project.summary}</p>
                    </div>
                </div>
            </div>
        }
    });

    let modals = PROJECTS.iter().enumerate().map(|(index, project)| {
        let id = modal_id(index);
        let label = format!("{}Label", id);
        html! {
            <div class="modal" id={id} tabindex="-1" aria-labelledby={label.clone()} aria-hidden="true">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title" id={label}>{project.title}</h5>
                            <button type="button" class="btn-close" aria-label="Close"></button>
                        </div>
                        <div class="modal-body">
                            <img src={project.image} class="img-fluid mb-3" alt={project.title} />
                            <p>{project.detail}</p>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-primary">{"View Live Site"}</button>
                        </div>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <>
            <style>{PAGE_CSS}</style>
            <nav class="navbar navbar-expand-lg navbar-dark fixed-top">
                <div class="container">
                    <a class="navbar-brand" href="#home">{"Demo Website"}</a>
                    <button class="navbar-toggler" type="button"
                        aria-controls="navbarNav" aria-expanded="false" aria-label="Toggle navigation">
                        <span class="navbar-toggler-icon"></span>
                    </button>
                    <div class="collapse navbar-collapse" id="navbarNav">
                        <ul class="navbar-nav ms-auto">
                            <li class="nav-item"><a class="nav-link" href="#home">{"Home"}</a></li>
                            <li class="nav-item"><a class="nav-link" href="#services">{"Services"}</a></li>
                            <li class="nav-item"><a class="nav-link" href="#portfolio">{"Portfolio"}</a></li>
                            <li class="nav-item"><a class="nav-link" href="#contact">{"Contact"}</a></li>
                        </ul>
                    </div>
                </div>
            </nav>

            <section id="home" class="hero d-flex align-items-center">
                <div class="container text-center">
                    <h1 class="display-4">{"Welcome to Our Website"}</h1>
                    <p class="lead">{"We provide simple and effective solutions"}</p>
                    <a href="#contact" class="btn btn-primary btn-lg">{"Get in Touch"}</a>
                </div>
            </section>

            <section id="services" class="py-5">
                <div class="container">
                    <h2 class="text-center mb-5">{"Our Services"}</h2>
                    <div class="row">{for services}</div>
                    <div class="row border-top pt-5 mt-4">{for statistics}</div>
                </div>
            </section>

            <section id="portfolio" class="py-5 bg-light">
                <div class="container">
                    <h2 class="text-center mb-4">{"Our Portfolio"}</h2>
                    <div class="filter-bar text-center mb-4">{for filters}</div>
                    <div class="row">{for items}</div>
                </div>
            </section>
            {for modals}

            <section id="contact" class="py-5">
                <div class="container">
                    <h2 class="text-center mb-5">{"Contact Us"}</h2>
                    <div class="row justify-content-center">
                        <div class="col-md-8">
                            <form id="contactForm" novalidate=true>
                                <div class="mb-3">
                                    <label for="name" class="form-label">{"Name"}</label>
                                    <input type="text" class="form-control" id="name" name="name" required=true />
                                </div>
                                <div class="mb-3">
                                    <label for="email" class="form-label">{"Email"}</label>
                                    <input type="email" class="form-control" id="email" name="email" required=true />
                                </div>
                                <div class="mb-3">
                                    <label for="message" class="form-label">{"Message"}</label>
                                    <textarea class="form-control" id="message" name="message" rows="5" required=true />
                                </div>
                                <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                            </form>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="py-4 text-center">
                <div class="container">
                    <p class="mb-0">{"© 2024 Demo Website. All rights reserved."}</p>
                </div>
            </footer>
        </>
    }
}

const PAGE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    .navbar {
        background-color: rgba(33, 37, 41, 0.85);
        transition: background-color 0.3s ease, padding 0.3s ease;
    }
    .navbar.navbar-scrolled {
        background-color: #212529;
        padding-top: 0.25rem;
        padding-bottom: 0.25rem;
        box-shadow: 0 2px 10px rgba(0, 0, 0, 0.3);
    }
    .navbar-collapse.show {
        display: block;
    }
    .hero {
        min-height: 100vh;
        padding-top: 80px;
        background: linear-gradient(135deg, #0d6efd, #6610f2);
        color: #fff;
    }
    .service-icon {
        font-size: 2.5rem;
        color: #0d6efd;
    }
    .statistic-number {
        font-size: 2.5rem;
        font-weight: 700;
        color: #0d6efd;
        transition: transform 0.3s ease;
    }
    .statistic-number.animate {
        transform: scale(1.1);
    }
    .filter-btn {
        margin: 0 0.25rem;
    }
    .portfolio-item {
        cursor: pointer;
        transition: transform 0.15s ease;
    }
    .portfolio-item.hide {
        display: none;
    }
    .portfolio-card {
        overflow: hidden;
        border-radius: 0.5rem;
        background: #fff;
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
    }
    .portfolio-caption {
        padding: 1rem;
    }
    .modal {
        display: none;
        background: rgba(0, 0, 0, 0.5);
    }
    .modal.show {
        display: block;
    }
    footer {
        background: #212529;
        color: #adb5bd;
    }
    @media (max-width: 768px) {
        .statistic-number {
            font-size: 2rem;
        }
    }
"#;
