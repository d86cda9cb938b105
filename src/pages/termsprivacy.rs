use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const LEGAL_STYLE: &str = r#"
.legal-content {
    min-height: 100vh;
    background: #f4f7fa;
    padding: 10rem 2rem 4rem;
    color: #1c2b39;
}

.legal-content > div {
    background: #fff;
    border-radius: 12px;
    padding: 3rem;
    max-width: 800px;
    margin: 0 auto;
    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
}

.legal-content h1 {
    font-size: 2rem;
    margin-bottom: 2rem;
    color: #16395c;
}

.legal-content h2 {
    font-size: 1.3rem;
    margin: 1.75rem 0 0.75rem;
    color: #16395c;
}

.legal-content p,
.legal-content li {
    color: #5a6b7b;
    line-height: 1.7;
    margin-bottom: 0.75rem;
}

.legal-content ul {
    padding-left: 1.5rem;
}

.legal-links {
    margin-top: 2rem;
}

.legal-links a {
    color: #f5a623;
    text-decoration: none;
    margin-right: 1.5rem;
}
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <style>{LEGAL_STYLE}</style>
            <div>
                <h1>{"Privacy Policy"}</h1>

                <h2>{"Information We Collect"}</h2>
                <p>
                    {"When you use our contact form we ask for your name, email address, and \
                      message, and optionally a phone number, company name, and the service you \
                      are interested in. We collect nothing else through this website."}
                </p>

                <h2>{"How We Use It"}</h2>
                <ul>
                    <li>{"To respond to your inquiry and prepare a quotation."}</li>
                    <li>{"To route your request to the nearest branch office."}</li>
                </ul>

                <h2>{"What We Don't Do"}</h2>
                <p>
                    {"We do not sell or share your details with third parties, and this website \
                      does not store form submissions on any server."}
                </p>

                <h2>{"Contact"}</h2>
                <p>
                    {"Questions about this policy can be sent to "}
                    <a href={config::INFO_EMAIL_URI}>{config::INFO_EMAIL}</a>
                    {"."}
                </p>

                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <Link<Route> to={Route::Home}>{"Back to Home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content">
            <style>{LEGAL_STYLE}</style>
            <div>
                <h1>{"Terms of Service"}</h1>

                <h2>{"Quotations"}</h2>
                <p>
                    {"Quotations provided through this website or by our team are indicative and \
                      valid for 30 days unless stated otherwise."}
                </p>

                <h2>{"Bookings & Carriage"}</h2>
                <p>
                    {"All shipments are carried under our standard trading conditions, available on \
                      request. Insurance coverage is included as described in the applicable service \
                      agreement."}
                </p>

                <h2>{"Liability"}</h2>
                <p>
                    {"Content on this website is provided for general information. Service \
                      availability, transit times, and coverage areas may change without notice."}
                </p>

                <h2>{"Contact"}</h2>
                <p>
                    {"For any questions about these terms, reach us at "}
                    <a href={config::INFO_EMAIL_URI}>{config::INFO_EMAIL}</a>
                    {" or "}
                    <a href={config::PRIMARY_PHONE_URI}>{config::PRIMARY_PHONE}</a>
                    {"."}
                </p>

                <div class="legal-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Home}>{"Back to Home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
