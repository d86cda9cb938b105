use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Service {
    icon: &'static str,
    name: &'static str,
    description: &'static str,
}

// Names match the contact form's service dropdown.
const CATALOGUE: [Service; 10] = [
    Service {
        icon: "truck-icon",
        name: "Road Transportation",
        description: "Full truckload, part load, and last-mile movements on every major Indian corridor.",
    },
    Service {
        icon: "warehouse-icon",
        name: "Warehousing & Storage",
        description: "Short- and long-term storage in secure facilities with inventory visibility.",
    },
    Service {
        icon: "globe-icon",
        name: "International Shipping",
        description: "Cross-border freight with customs clearance handled end to end.",
    },
    Service {
        icon: "clock-icon",
        name: "Express Delivery",
        description: "Same-day and next-day delivery in select cities for time-critical cargo.",
    },
    Service {
        icon: "ship-icon",
        name: "Ocean Freight",
        description: "FCL and LCL ocean shipments to and from all major ports.",
    },
    Service {
        icon: "plane-icon",
        name: "Air Freight",
        description: "Priority air cargo for shipments that cannot wait for the road.",
    },
    Service {
        icon: "chain-icon",
        name: "Supply Chain Management",
        description: "Planning, sourcing coordination, and distribution run as one managed service.",
    },
    Service {
        icon: "crane-icon",
        name: "Project Cargo",
        description: "Over-dimensional and heavy-lift moves with route surveys and permits.",
    },
    Service {
        icon: "cart-icon",
        name: "E-commerce Logistics",
        description: "Fulfilment, returns, and doorstep delivery tuned for online retail volumes.",
    },
    Service {
        icon: "snowflake-icon",
        name: "Cold Chain Logistics",
        description: "Temperature-controlled transport and storage for perishable goods.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero">
                <div class="hero-content fade-up">
                    <h1>{"Our Services"}</h1>
                    <p>{"A complete logistics portfolio under one roof"}</p>
                </div>
            </section>

            <section class="catalogue">
                <div class="catalogue-grid">
                    { for CATALOGUE.iter().enumerate().map(|(index, service)| html! {
                        <div class="service-card fade-up" style={format!("animation-delay: {}ms", index * 80)}>
                            <i class={classes!("service-icon", service.icon)}></i>
                            <h3>{service.name}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="services-cta">
                <h2>{"Not Sure Which Service Fits?"}</h2>
                <p>{"Describe your shipment and we'll recommend the right combination."}</p>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    {"Talk to an Expert"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .services-page {
                    background: #f4f7fa;
                    color: #1c2b39;
                }

                @keyframes fadeUp {
                    from {
                        opacity: 0;
                        transform: translateY(30px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .fade-up {
                    opacity: 0;
                    animation: fadeUp 0.6s ease forwards;
                }

                .page-hero {
                    background: linear-gradient(135deg, #0d2137, #16395c);
                    color: #fff;
                    padding: 10rem 2rem 6rem;
                    text-align: center;
                }

                .page-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .page-hero p {
                    font-size: 1.2rem;
                    color: #9fb3c8;
                }

                .catalogue {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .catalogue-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .service-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                }

                .service-card h3 {
                    margin: 1rem 0 0.6rem;
                }

                .service-card p {
                    color: #5a6b7b;
                    line-height: 1.6;
                }

                .services-cta {
                    background: #0d2137;
                    color: #fff;
                    text-align: center;
                    padding: 4rem 2rem;
                }

                .services-cta h2 {
                    font-size: 2.2rem;
                    margin-bottom: 0.75rem;
                }

                .services-cta p {
                    color: #9fb3c8;
                    margin-bottom: 2rem;
                }

                .hero-cta {
                    display: inline-block;
                    background: #f5a623;
                    color: #0d2137;
                    padding: 0.9rem 2.2rem;
                    border-radius: 8px;
                    font-weight: 700;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .hero-cta:hover {
                    background: #ffb84d;
                }

                @media (max-width: 900px) {
                    .catalogue-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (max-width: 600px) {
                    .catalogue-grid {
                        grid-template-columns: 1fr;
                    }

                    .page-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
