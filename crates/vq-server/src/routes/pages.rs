//! Marketing pages for the Virtue Quotient site.
//!
//! Every page shares one shell: header navigation, the page body, and a
//! footer with the newsletter form. Bodies are static HTML with
//! `{{PLACEHOLDER}}` slots filled from [`SiteConfig`]. The VQ Snapshot page
//! is rendered client-side against the `/v1/snapshot` API.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use chrono::Datelike;

use crate::config::SiteConfig;
use crate::state::AppState;

/// Build the pages router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/book", get(book))
        .route("/what-is-vq", get(what_is_vq))
        .route("/about", get(about))
        .route("/snapshot", get(snapshot))
}

async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(site_shell(
        &state.site,
        "Virtue Quotient",
        "home",
        HOME,
    ))
}

async fn book(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(site_shell(&state.site, "The Book", "book", BOOK))
}

async fn what_is_vq(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(site_shell(
        &state.site,
        "What is VQ?",
        "what-is-vq",
        WHAT_IS_VQ,
    ))
}

async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(site_shell(&state.site, "About Dr. Rosa Lee", "about", ABOUT))
}

async fn snapshot(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(site_shell(&state.site, "VQ Snapshot", "snapshot", SNAPSHOT))
}

/// Fallback for every unmatched path.
pub async fn not_found(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(site_shell(&state.site, "Page Not Found", "", NOT_FOUND)),
    )
}

/// Render the shared shell around a page body.
fn site_shell(site: &SiteConfig, title: &str, active: &str, content: &str) -> String {
    let nav_item = |href: &str, id: &str, label: &str| -> String {
        let class = if active == id {
            "nav-link active"
        } else {
            "nav-link"
        };
        format!("<a href=\"{href}\" class=\"{class}\">{label}</a>")
    };

    let mut html = String::with_capacity(32768);
    html.push_str(SITE_HEAD);
    html.push_str("<title>");
    html.push_str(title);
    html.push_str(" | Virtue Quotient</title>\n</head>\n<body>\n");

    html.push_str(r#"<header class="site-header"><div class="container header-inner"><a href="/" class="logo">VQ<span>.</span></a><nav class="site-nav">"#);
    html.push_str(&nav_item("/what-is-vq", "what-is-vq", "What is VQ?"));
    html.push_str(&nav_item("/book", "book", "The Book"));
    html.push_str(&nav_item("/snapshot", "snapshot", "VQ Snapshot"));
    html.push_str(&nav_item("/about", "about", "About"));
    html.push_str(r#"</nav><a href="/snapshot" class="btn btn-accent header-cta">Take the Snapshot</a>"#);
    html.push_str(r#"<button type="button" class="menu-toggle" id="menu-toggle" aria-label="Open menu" aria-controls="mobile-nav" aria-expanded="false">&#9776;</button></div>"#);

    // Collapsed menu for narrow screens, same links as the header nav.
    html.push_str(r#"<nav class="mobile-nav hidden" id="mobile-nav">"#);
    html.push_str(&nav_item("/what-is-vq", "what-is-vq", "What is VQ?"));
    html.push_str(&nav_item("/book", "book", "The Book"));
    html.push_str(&nav_item("/snapshot", "snapshot", "VQ Snapshot"));
    html.push_str(&nav_item("/about", "about", "About"));
    html.push_str(r#"<a href="/snapshot" class="btn btn-accent">Take the Snapshot</a></nav></header>"#);

    html.push_str("\n<main>\n");
    html.push_str(content);
    html.push_str("\n</main>\n");

    html.push_str(&SITE_FOOTER.replace("{{YEAR}}", &chrono::Utc::now().year().to_string()));
    html.push_str("\n</body>\n</html>");

    fill_placeholders(&html, site)
}

fn fill_placeholders(html: &str, site: &SiteConfig) -> String {
    html.replace("{{AMAZON_URL}}", &site.amazon_url)
        .replace("{{KINDLE_URL}}", &site.kindle_url)
        .replace("{{BOOK_COVER_URL}}", &site.book_cover_url)
        .replace("{{AUTHOR_IMAGE_URL}}", &site.author_image_url)
}

/// Document head and stylesheet shared by every page.
const SITE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<link rel="preconnect" href="https://fonts.googleapis.com"/>
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin/>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;700&family=Playfair+Display:wght@700&display=swap" rel="stylesheet"/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--navy:#0f172a;--blue:#1e3a8a;--amber:#f59e0b;--amber-soft:#fffbeb;--slate:#475569;--muted:#94a3b8;--line:#e2e8f0;--bg:#f8fafc;--font:'Inter',-apple-system,sans-serif;--serif:'Playfair Display',Georgia,serif}
body{font-family:var(--font);color:var(--navy);background:#fff;line-height:1.6;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
img{max-width:100%;display:block}
.container{max-width:1120px;margin:0 auto;padding:0 24px}
.site-header{position:sticky;top:0;z-index:20;background:rgba(255,255,255,.95);border-bottom:1px solid var(--line);backdrop-filter:blur(8px)}
.header-inner{display:flex;align-items:center;justify-content:space-between;height:72px;gap:24px}
.logo{font-family:var(--serif);font-size:28px;font-weight:700;color:var(--blue)}
.logo span{color:var(--amber)}
.site-nav{display:flex;gap:28px}
.nav-link{font-weight:500;color:var(--slate)}
.nav-link:hover,.nav-link.active{color:var(--blue)}
.btn{display:inline-flex;align-items:center;justify-content:center;padding:14px 28px;border-radius:6px;font-weight:600;border:2px solid transparent;cursor:pointer;font-size:16px;transition:transform .2s,box-shadow .2s}
.btn:hover{transform:translateY(-2px);box-shadow:0 10px 20px rgba(15,23,42,.15)}
.btn[disabled]{opacity:.5;cursor:not-allowed;transform:none;box-shadow:none}
.btn-primary{background:var(--blue);color:#fff}
.btn-secondary{background:#fff;color:var(--blue);border-color:var(--blue)}
.btn-accent{background:var(--amber);color:var(--navy)}
.btn-link{background:none;color:var(--blue);padding:14px 0}
.hero{background:var(--navy);color:#fff;text-align:center;padding:140px 0 120px}
.hero h1{font-family:var(--serif);font-size:clamp(36px,6vw,68px);line-height:1.2;margin-bottom:36px}
.hero h1 .line{display:block;margin-bottom:12px}
.hero h1 em{color:var(--amber);font-style:normal}
.hero p{font-size:20px;color:#cbd5e1;max-width:640px;margin:0 auto 40px}
.actions{display:flex;gap:16px;flex-wrap:wrap;justify-content:center}
section{padding:96px 0}
section.alt{background:var(--bg)}
.center{text-align:center}
h2.section-title{font-size:36px;margin-bottom:20px}
.lead{font-size:19px;color:var(--slate);max-width:760px;margin:0 auto 48px}
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:24px;margin-bottom:40px}
.card{background:#fff;border:1px solid var(--line);border-radius:14px;padding:32px;box-shadow:0 2px 6px rgba(15,23,42,.05);transition:transform .2s,box-shadow .2s}
.card:hover{transform:translateY(-4px);box-shadow:0 14px 28px rgba(15,23,42,.1)}
.card h3{font-size:20px;margin-bottom:8px}
.card p{color:var(--slate)}
.badge{font-family:var(--serif);font-size:40px;font-weight:700;color:var(--blue);margin-bottom:8px}
.card.highlight{border-color:var(--amber);background:var(--amber-soft)}
.split{display:grid;grid-template-columns:1fr 1.4fr;gap:64px;align-items:center}
.split.reverse{grid-template-columns:1.4fr 1fr}
.cover{border-radius:8px;box-shadow:0 24px 48px rgba(15,23,42,.25)}
.checks{list-style:none;margin:24px 0 32px}
.checks li{padding-left:28px;position:relative;margin-bottom:12px;color:var(--slate)}
.checks li::before{content:"\2713";position:absolute;left:0;color:var(--amber);font-weight:700}
.eyebrow{text-transform:uppercase;letter-spacing:.12em;font-size:13px;font-weight:700;color:var(--amber);margin-bottom:12px}
.tags{display:flex;gap:12px;flex-wrap:wrap;margin:24px 0}
.tag{background:#fff;border:1px solid var(--line);border-radius:999px;padding:6px 16px;font-size:14px;font-weight:500}
blockquote{font-style:italic;color:var(--slate);margin-bottom:20px}
.quote-author{font-weight:700}
.quote-title{font-size:14px;color:var(--muted)}
.page-title{font-family:var(--serif);font-size:48px;margin-bottom:12px}
.page-subtitle{font-size:26px;color:var(--amber);margin-bottom:32px}
.prose p{font-size:18px;color:var(--slate);margin-bottom:20px}
.callout{background:var(--navy);color:#fff;border-radius:16px;padding:48px;text-align:center}
.callout p{color:#cbd5e1;margin:0 auto 28px;max-width:680px}
.quiz{max-width:720px;margin:0 auto}
.hidden{display:none!important}
.progress-head{display:flex;justify-content:space-between;font-size:14px;font-weight:700;color:var(--blue);text-transform:uppercase;margin-bottom:8px}
.progress{height:8px;background:var(--line);border-radius:999px;overflow:hidden;margin-bottom:40px}
.progress-bar{height:100%;background:var(--blue);width:0;transition:width .4s}
.question{background:#fff;border:1px solid var(--line);border-radius:14px;padding:32px;margin-bottom:24px}
.question p{font-size:19px;font-weight:500;margin-bottom:24px}
.scale{display:flex;justify-content:space-between;gap:8px}
.scale button{width:52px;height:52px;border-radius:50%;border:none;background:#f1f5f9;color:var(--muted);font-size:18px;font-weight:700;cursor:pointer;transition:transform .15s}
.scale button.selected{background:var(--blue);color:#fff;transform:scale(1.1)}
.scale-labels{display:flex;justify-content:space-between;font-size:12px;text-transform:uppercase;color:var(--muted);margin-top:12px}
.notice{color:#b45309;font-weight:500;margin-top:12px}
.form-card{max-width:460px;margin:0 auto;background:#fff;border:1px solid var(--line);border-radius:16px;padding:40px;box-shadow:0 20px 40px rgba(15,23,42,.08)}
.form-card label{display:block;font-size:13px;font-weight:700;text-transform:uppercase;color:var(--slate);margin:16px 0 6px}
.form-card input[type=text],.form-card input[type=email]{width:100%;padding:12px 16px;border:1px solid #cbd5e1;border-radius:8px;font-size:16px}
.opt-in{display:flex;gap:12px;align-items:flex-start;background:var(--bg);padding:16px;border-radius:8px;margin-top:20px;font-size:14px;color:var(--slate)}
.result-head{background:var(--navy);color:#fff;text-align:center;padding:48px;border-radius:16px 16px 0 0}
.score{font-size:80px;font-weight:700;color:var(--amber)}
.score small{font-size:32px;color:var(--muted);font-weight:300}
.band-label{display:inline-block;background:var(--blue);border-radius:999px;padding:8px 24px;font-weight:700;text-transform:uppercase;letter-spacing:.06em}
.result-body{border:1px solid var(--line);border-top:none;border-radius:0 0 16px 16px;padding:48px}
.percentile{display:inline-block;background:#f1f5f9;border-radius:8px;padding:8px 16px;font-weight:700;margin-top:20px}
.reflection{background:var(--amber-soft);border-left:4px solid var(--amber);padding:28px;margin:36px 0;font-style:italic}
.site-footer{background:var(--navy);color:#cbd5e1;padding:64px 0 32px}
.footer-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:40px;margin-bottom:48px}
.site-footer h4{color:#fff;margin-bottom:16px}
.site-footer ul{list-style:none}
.site-footer li{margin-bottom:8px}
.site-footer a:hover{color:var(--amber)}
.newsletter-form{display:flex;gap:8px;margin-top:12px}
.newsletter-form input{flex:1;padding:10px 12px;border-radius:6px;border:1px solid #334155;background:#1e293b;color:#fff}
.newsletter-form button{padding:10px 16px;border-radius:6px;border:none;background:var(--amber);font-weight:700;cursor:pointer}
.copyright{border-top:1px solid #1e293b;padding-top:24px;text-align:center;font-size:14px;color:var(--muted)}
.menu-toggle{display:none;background:none;border:none;font-size:28px;color:var(--navy);cursor:pointer}
.mobile-nav{display:flex;flex-direction:column;gap:16px;padding:16px 24px 24px;border-top:1px solid var(--line);background:#fff}
@media(min-width:861px){.mobile-nav{display:none!important}}
@media(max-width:860px){.site-nav,.header-cta{display:none}.menu-toggle{display:block}.split,.split.reverse{grid-template-columns:1fr}}
</style>
"#;

/// Footer with the newsletter form. `{{YEAR}}` is the current year.
const SITE_FOOTER: &str = r##"<footer class="site-footer"><div class="container">
<div class="footer-grid">
<div><h4>VQ</h4><ul><li><a href="/what-is-vq">What is VQ?</a></li><li><a href="/book">The Book</a></li><li><a href="/snapshot">VQ Snapshot</a></li><li><a href="/about">About Dr. Lee</a></li></ul></div>
<div><h4>Resources</h4><ul><li><a href="#">Case Studies</a></li><li><a href="#">Research Papers</a></li><li><a href="#">Media Kit</a></li><li><a href="#">Contact</a></li></ul></div>
<div><h4>Connect</h4><ul><li><a href="https://www.linkedin.com/" target="_blank" rel="noreferrer">LinkedIn</a></li><li><a href="https://twitter.com/" target="_blank" rel="noreferrer">Twitter</a></li></ul></div>
<div><h4>Newsletter</h4><p>Get VQ insights delivered to your inbox.</p>
<form class="newsletter-form" id="newsletter-form"><input type="email" name="email" placeholder="Your email" required/><button type="submit">Sign Up</button></form>
<p id="newsletter-status"></p></div>
</div>
<div class="copyright">&copy; {{YEAR}} Virtue Quotient. All rights reserved.</div>
</div></footer>
<script>
document.getElementById('menu-toggle').addEventListener('click', (e) => {
  const menu = document.getElementById('mobile-nav');
  const open = menu.classList.toggle('hidden') === false;
  e.currentTarget.setAttribute('aria-expanded', String(open));
  e.currentTarget.innerHTML = open ? '&times;' : '&#9776;';
});
document.getElementById('newsletter-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const status = document.getElementById('newsletter-status');
  const email = e.target.elements.email.value;
  try {
    const res = await fetch('/v1/newsletter', {method: 'POST', headers: {'Content-Type': 'application/json'}, body: JSON.stringify({email})});
    if (!res.ok) {
      const body = await res.json().catch(() => ({}));
      throw new Error(body.message || 'Sign-up failed');
    }
    status.textContent = 'Thanks for signing up!';
    e.target.reset();
  } catch (err) {
    status.textContent = err.message;
  }
});
</script>"##;

const HOME: &str = r#"<div class="hero"><div class="container">
<h1><span class="line">IQ measures intelligence.</span><span class="line">EQ measures emotion.</span><span class="line">VQ measures <em>who you are.</em></span></h1>
<p>Virtue Quotient (VQ) is the missing metric of character and conscience in a world obsessed with competence.</p>
<div class="actions"><a href="/what-is-vq" class="btn btn-accent">Discover VQ</a><a href="/book" class="btn btn-secondary">Get the Book</a></div>
</div></div>

<section><div class="container center">
<h2 class="section-title">The Missing Piece of Human Potential</h2>
<p class="lead">For decades, we've optimized for smarts (IQ) and social skills (EQ). Yet, highly intelligent and charismatic leaders still fail catastrophically. Why? Because they lack VQ: the structural capacity for integrity under pressure.</p>
<div class="cards">
<div class="card"><div class="badge">IQ</div><h3>Capabilities</h3><p>What you can do.</p></div>
<div class="card"><div class="badge">EQ</div><h3>Relationships</h3><p>How you relate.</p></div>
<div class="card highlight"><div class="badge">VQ</div><h3>Character</h3><p>Who you are.</p></div>
</div>
<a href="/what-is-vq" class="btn btn-link">Learn the full framework &rarr;</a>
</div></section>

<section class="alt"><div class="container split">
<a href="/book"><img class="cover" src="{{BOOK_COVER_URL}}" alt="Virtue Quotient Book Cover"/></a>
<div>
<h2 class="section-title">Virtue Quotient: The Missing Key Beyond IQ and EQ</h2>
<p class="lead">In this groundbreaking book, Dr. Rosa Lee unveils the science of character. Discover why good people make bad decisions, and how to build the structural integrity needed to sustain success.</p>
<ul class="checks">
<li>Why character is a measurable competency, not just a feeling.</li>
<li>The 5 Clusters of VQ and how to assess yours.</li>
<li>How to prevent 'VQ Erosion' in high-stakes environments.</li>
</ul>
<div class="actions" style="justify-content:flex-start">
<a href="{{AMAZON_URL}}" class="btn btn-primary" target="_blank" rel="noreferrer">Buy on Amazon</a>
<a href="{{KINDLE_URL}}" class="btn btn-secondary" target="_blank" rel="noreferrer">Get for Kindle</a>
<a href="/book" class="btn btn-link">Read a sample chapter</a>
</div>
</div>
</div></section>

<section><div class="container">
<h2 class="section-title center">Who needs VQ?</h2>
<div class="cards">
<div class="card"><h3>Individuals</h3><p>For self-mastery, life decisions, and building unshakeable self-trust.</p></div>
<div class="card"><h3>Leaders</h3><p>For hiring the right people, building trust, and ensuring long-term organizational health.</p></div>
<div class="card"><h3>Researchers</h3><p>A new lens for psychology, ethics, and decision sciences beyond the standard models.</p></div>
</div>
</div></section>

<section class="alt"><div class="container split reverse">
<div>
<div class="eyebrow">Founder &amp; Author</div>
<h2 class="section-title">Dr. Rosa Lee</h2>
<p class="lead" style="margin-left:0">Dr. Rosa Lee is a medical doctor, entrepreneur, and the founder of the Virtue Quotient framework. After years of clinical practice and business leadership, she realized that our definitions of "success" were dangerously incomplete.</p>
<div class="tags"><span class="tag">Physician</span><span class="tag">Entrepreneur</span><span class="tag">Author</span></div>
<a href="/about" class="btn btn-link">Read Full Bio &rarr;</a>
</div>
<img class="cover" src="{{AUTHOR_IMAGE_URL}}" alt="Dr. Rosa Lee"/>
</div></section>

<section><div class="container">
<h2 class="section-title center">What Leaders Are Saying</h2>
<div class="cards">
<div class="card"><blockquote>"VQ is the missing piece of the leadership puzzle. It moves the conversation from 'what do you know' to 'who are you under pressure.'"</blockquote><div class="quote-author">A. Johnson</div><div class="quote-title">CEO, Global Tech Firm</div></div>
<div class="card"><blockquote>"This framework should be mandatory reading for every executive team. It's a blueprint for building a culture of unshakeable integrity."</blockquote><div class="quote-author">Dr. S. Chen</div><div class="quote-title">Organizational Psychologist</div></div>
<div class="card"><blockquote>"I thought I understood character, but VQ provides the measurable, actionable steps to cultivate it. Truly transformative."</blockquote><div class="quote-author">M. Rodriguez</div><div class="quote-title">Venture Capitalist</div></div>
</div>
</div></section>

<section class="alt"><div class="container center">
<h2 class="section-title">Ready to Measure Your VQ?</h2>
<p class="lead">Take the free, 3-minute VQ Snapshot and get your estimated percentile.</p>
<a href="/snapshot" class="btn btn-primary">Start VQ Snapshot</a>
</div></section>"#;

const BOOK: &str = r#"<section><div class="container split">
<div>
<img class="cover" src="{{BOOK_COVER_URL}}" alt="Virtue Quotient Book Cover"/>
<div class="actions" style="margin-top:32px">
<a href="{{AMAZON_URL}}" class="btn btn-primary" target="_blank" rel="noreferrer">Buy on Amazon</a>
<a href="{{KINDLE_URL}}" class="btn btn-secondary" target="_blank" rel="noreferrer">Get for Kindle</a>
</div>
</div>
<div class="prose">
<h1 class="page-title">Virtue Quotient (VQ)</h1>
<h2 class="page-subtitle">The Missing Key Beyond IQ and EQ</h2>
<p>Dr. Rosa Lee's groundbreaking work introduces the Virtue Quotient (VQ), a measurable framework for understanding and cultivating the structural integrity of character. In a world where competence and charisma often overshadow conscience, VQ provides the essential metric for sustainable success and true human greatness.</p>
<div class="tags"><span class="tag">Hardcover &amp; Kindle</span><span class="tag">5-Star Reviews</span><span class="tag">Used by Fortune 500</span><span class="tag">Award-Winning Research</span></div>
<h3>What You Will Learn</h3>
<ul class="checks">
<li>The 5 Clusters of VQ: Integrity, Courage, Humility, Justice, and Temperance.</li>
<li>Actionable steps to measure and improve your VQ in daily life and leadership.</li>
<li>How to inoculate yourself and your organization against "VQ Erosion."</li>
<li>The difference between situational ethics and structural character.</li>
</ul>
</div>
</div></section>"#;

const WHAT_IS_VQ: &str = r#"<section><div class="container">
<div class="center">
<h1 class="page-title">What is the Virtue Quotient (VQ)?</h1>
<p class="lead">VQ is the metric of <strong>structural character</strong>: the capacity to maintain integrity and act in alignment with one's values, especially under pressure.</p>
</div>
<div class="split reverse">
<div class="prose">
<h2 class="section-title">The Three Pillars of Human Potential</h2>
<p>For too long, the world has focused on a two-dimensional model of success: <strong>IQ</strong> (cognitive intelligence) and <strong>EQ</strong> (emotional intelligence). While essential, these pillars are insufficient. A person can be brilliant and charismatic, yet still lack the inner fortitude to make the right choice when it's the hardest choice. VQ completes the model.</p>
<div class="card" style="margin-bottom:16px"><h3>IQ (Intelligence Quotient)</h3><p>Measures cognitive ability, problem-solving, and technical competence. The 'What you know' and 'What you can do'.</p></div>
<div class="card" style="margin-bottom:16px"><h3>EQ (Emotional Quotient)</h3><p>Measures self-awareness, empathy, and social skills. The 'How you relate to others'.</p></div>
<div class="card highlight"><h3>VQ (Virtue Quotient)</h3><p>Measures structural character, integrity under pressure, and moral alignment. The 'Who you are' when no one is watching.</p></div>
</div>
<div class="card">
<h3>VQ is Measurable</h3>
<p>VQ is not a vague concept. Dr. Lee's framework breaks character down into 5 measurable clusters, allowing individuals and organizations to assess and actively develop their moral strength.</p>
<ul class="checks"><li>Integrity</li><li>Courage</li><li>Humility</li><li>Justice</li><li>Temperance</li></ul>
<a href="/snapshot" class="btn btn-primary">Take the VQ Snapshot</a>
</div>
</div>
<div class="callout" style="margin-top:72px">
<h2 class="section-title">The VQ Problem: Why Good People Fail</h2>
<p>The core problem is <strong>VQ Erosion</strong>. In high-pressure, high-stakes environments, the structural integrity of character can wear down, leading to catastrophic ethical failures, even in people who started with good intentions.</p>
<a href="/book" class="btn btn-accent">Read the Solution in the Book &rarr;</a>
</div>
</div></section>"#;

const ABOUT: &str = r#"<section><div class="container split">
<div>
<img class="cover" src="{{AUTHOR_IMAGE_URL}}" alt="Dr. Rosa Lee"/>
<div class="tags"><span class="tag">Physician (MD)</span><span class="tag">Entrepreneur</span><span class="tag">Author &amp; Speaker</span></div>
</div>
<div class="prose">
<h1 class="page-title">Dr. Rosa Lee, MD</h1>
<h2 class="page-subtitle">Founder of the Virtue Quotient Framework</h2>
<p>Dr. Rosa Lee is a medical doctor by training, a successful entrepreneur, and a leading voice in the science of character and leadership. Her journey began in the high-stakes world of medicine, where she observed that the most brilliant and technically competent individuals were often the most vulnerable to ethical compromise under pressure. This led her to a decade of research into what truly sustains human greatness.</p>
<p>She developed the Virtue Quotient (VQ) framework as a response to the incomplete models of IQ and EQ. VQ is her evidence-based system for measuring and cultivating the structural integrity of character: the capacity to make the right choice when it is the hardest choice.</p>
<blockquote>"We have spent centuries perfecting the art of competence. It is time we dedicate ourselves to the science of conscience."</blockquote>
<h3>Key Areas of Focus</h3>
<div class="cards" style="margin-top:20px">
<div class="card"><h3>Character Science</h3><p>Bridging ancient wisdom with modern neuroscience and psychology.</p></div>
<div class="card"><h3>Ethical Leadership</h3><p>Training executives to build VQ-driven organizational cultures.</p></div>
<div class="card"><h3>Public Speaking</h3><p>Keynotes on VQ, integrity, and sustainable success.</p></div>
<div class="card"><h3>Writing</h3><p>Author of the groundbreaking book, Virtue Quotient.</p></div>
</div>
</div>
</div></section>"#;

const NOT_FOUND: &str = r#"<section><div class="container center">
<h1 class="page-title">404</h1>
<p class="lead">Page Not Found</p>
<a href="/" class="btn btn-primary">Go to Home</a>
</div></section>"#;

/// The VQ Snapshot quiz. All state lives server-side in the session; the
/// script only renders whatever the API returns.
const SNAPSHOT: &str = r##"<section class="alt"><div class="container quiz">

<div id="stage-intro" class="center">
<h2 class="section-title">VQ Snapshot (Free)</h2>
<p class="lead">This 14-question rapid assessment takes about 3-5 minutes. Be honest. This is for self-awareness, not performance.</p>
<button class="btn btn-primary" id="start-btn">Start Quick Check</button>
</div>

<div id="stage-questionnaire" class="hidden">
<div class="progress-head"><span>Progress</span><span id="progress-count">0 / 14</span></div>
<div class="progress"><div class="progress-bar" id="progress-bar"></div></div>
<div id="questions"></div>
<div class="center" style="margin-top:40px">
<button class="btn btn-primary" id="calculate-btn" disabled>Calculate VQ</button>
<p class="notice" id="incomplete-notice">Please answer all questions to proceed.</p>
</div>
</div>

<div id="stage-lead_capture" class="hidden">
<form class="form-card" id="contact-form">
<h3 class="center">Unlock Your Profile</h3>
<p class="center" style="color:var(--slate)">Enter your details to view your VQ Score and Percentile.</p>
<label for="contact-name">Name</label><input type="text" id="contact-name" name="name" placeholder="Jane Doe" required/>
<label for="contact-email">Email</label><input type="email" id="contact-email" name="email" placeholder="jane@example.com" required/>
<div class="opt-in"><input type="checkbox" id="contact-opt-in" name="newsletter_opt_in" checked/><label for="contact-opt-in" style="margin:0;text-transform:none;font-weight:400">Send me VQ insights and case studies (1&ndash;2x/month). Unsubscribe anytime.</label></div>
<p class="notice hidden" id="contact-notice"></p>
<button type="submit" class="btn btn-primary" style="width:100%;margin-top:24px">Reveal Results</button>
</form>
</div>

<div id="stage-results" class="hidden">
<div class="result-head">
<div class="eyebrow" style="color:#bfdbfe">Your VQ Snapshot</div>
<div class="score"><span id="result-score"></span><small>/<span id="result-max"></span></small></div>
<div class="band-label" id="result-band"></div>
</div>
<div class="result-body">
<h3>What this means</h3>
<p id="result-description" style="font-size:18px;color:var(--slate)"></p>
<div class="percentile">Estimated Percentile: <span id="result-percentile"></span></div>
<div class="reflection"><strong>Optional Reflection</strong><p id="reflection-prompt"></p></div>
<div class="center">
<h3 style="margin-bottom:20px">Take the next step</h3>
<div class="actions">
<a href="{{AMAZON_URL}}" class="btn btn-primary" target="_blank" rel="noreferrer">Get the Book</a>
<button class="btn btn-secondary" id="beta-btn">Learn About Beta Test</button>
<button class="btn btn-link" id="retake-btn">Retake the Snapshot</button>
</div>
<p class="notice hidden" id="beta-notice">Info on the beta version will be sent to your email.</p>
</div>
</div>
</div>

<p class="notice hidden" id="error-notice"></p>
</div></section>
<script>
(() => {
  const api = '/v1/snapshot';
  const stages = ['intro', 'questionnaire', 'lead_capture', 'results'];
  const el = (id) => document.getElementById(id);
  let sessionId = null;
  let catalog = null;

  async function call(method, path, body) {
    const opts = {method, headers: {}};
    if (body !== undefined) {
      opts.headers['Content-Type'] = 'application/json';
      opts.body = JSON.stringify(body);
    }
    const res = await fetch(api + path, opts);
    const data = await res.json().catch(() => ({}));
    if (res.status === 404 && path.startsWith('/sessions/')) {
      await openSession();
      throw new Error('Your session expired. Please start again.');
    }
    if (!res.ok) throw new Error(data.message || res.statusText);
    return data;
  }

  const session = (suffix) => '/sessions/' + sessionId + suffix;

  async function openSession() {
    const res = await fetch(api + '/sessions', {method: 'POST'});
    const data = await res.json();
    sessionId = data.session_id;
    render(data.state);
  }

  function buildQuestions() {
    const root = el('questions');
    for (const q of catalog.questions) {
      const card = document.createElement('div');
      card.className = 'question';
      const text = document.createElement('p');
      text.textContent = q.text;
      card.appendChild(text);
      const scale = document.createElement('div');
      scale.className = 'scale';
      for (let v = catalog.scale.min; v <= catalog.scale.max; v++) {
        const b = document.createElement('button');
        b.type = 'button';
        b.textContent = v;
        b.dataset.question = q.id;
        b.dataset.value = v;
        b.addEventListener('click', () => act('PUT', session('/answers/' + q.id), {value: v}));
        scale.appendChild(b);
      }
      card.appendChild(scale);
      const labels = document.createElement('div');
      labels.className = 'scale-labels';
      labels.innerHTML = '<span></span><span></span>';
      labels.children[0].textContent = catalog.scale.low_label;
      labels.children[1].textContent = catalog.scale.high_label;
      card.appendChild(labels);
      root.appendChild(card);
    }
    el('reflection-prompt').textContent = '"' + catalog.reflection_prompt + '"';
  }

  function render(state) {
    for (const s of stages) el('stage-' + s).classList.toggle('hidden', s !== state.stage);
    el('progress-count').textContent = state.answered + ' / ' + state.total;
    el('progress-bar').style.width = (100 * state.answered / state.total) + '%';
    for (const b of document.querySelectorAll('.scale button')) {
      b.classList.toggle('selected', state.answers[b.dataset.question] === Number(b.dataset.value));
    }
    el('calculate-btn').disabled = !state.can_submit_questionnaire;
    el('incomplete-notice').classList.toggle('hidden', state.complete);
    if (state.stage === 'lead_capture') {
      el('contact-name').value = state.contact.name;
      el('contact-email').value = state.contact.email;
      el('contact-opt-in').checked = state.contact.newsletter_opt_in;
    }
    if (state.outcome) {
      el('result-score').textContent = state.outcome.score;
      el('result-max').textContent = state.outcome.max_score;
      el('result-band').textContent = state.outcome.band.label;
      el('result-description').textContent = state.outcome.band.description;
      el('result-percentile').textContent = state.outcome.band.percentile;
    }
  }

  function explain(reason) {
    if (!reason) return '';
    if (reason.kind === 'incomplete_answers') return 'Please answer all questions to proceed.';
    if (reason.kind === 'invalid_contact') return 'Please enter your ' + reason.missing.join(' and ') + '.';
    return 'That step is not available right now.';
  }

  async function act(method, path, body) {
    el('error-notice').classList.add('hidden');
    try {
      const res = await call(method, path, body);
      render(res.state);
      return res;
    } catch (err) {
      el('error-notice').textContent = err.message;
      el('error-notice').classList.remove('hidden');
      return null;
    }
  }

  el('start-btn').addEventListener('click', () => act('POST', session('/start')));
  el('calculate-btn').addEventListener('click', () => act('POST', session('/questionnaire/submit')));
  el('retake-btn').addEventListener('click', () => act('POST', session('/reset')));
  el('beta-btn').addEventListener('click', () => el('beta-notice').classList.remove('hidden'));

  el('contact-form').addEventListener('submit', async (e) => {
    e.preventDefault();
    const notice = el('contact-notice');
    const patched = await act('PATCH', session('/contact'), {
      name: el('contact-name').value,
      email: el('contact-email').value,
      newsletter_opt_in: el('contact-opt-in').checked,
    });
    if (!patched) return;
    const res = await act('POST', session('/contact/submit'));
    if (res && res.status === 'blocked') {
      notice.textContent = explain(res.reason);
      notice.classList.remove('hidden');
    } else {
      notice.classList.add('hidden');
    }
  });

  (async () => {
    catalog = await (await fetch(api + '/questions')).json();
    buildQuestions();
    await openSession();
  })();
})();
</script>"##;
