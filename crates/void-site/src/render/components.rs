//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::Config;

/// Inline CSS for all pages.
///
/// Dark, flat layout with one accent colour. The subscribe loader is pure CSS.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#0b0b0f;--fg:#ececf1;--fg2:#a3a3b2;--fg3:#6b6b7b;--accent:#8b5cf6;--accent-hover:#a78bfa;--surface:#14141b;--border:rgba(139,92,246,.18);--mono:"SF Mono",ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column}
main{flex:1;width:100%}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}
.container{max-width:1080px;margin:0 auto;padding:0 1.25rem}
.section{padding:4rem 0}

.site-header{display:flex;align-items:center;justify-content:space-between;max-width:1080px;margin:0 auto;padding:1.25rem;width:100%}
.site-name{font-size:1.5rem;font-weight:800;letter-spacing:-.04em;color:var(--fg)}
.site-name:hover{text-decoration:none;color:var(--accent)}
.site-nav{display:flex;gap:1.25rem;font-size:.95rem}
.site-nav a{color:var(--fg2)}
.site-nav a:hover{color:var(--fg);text-decoration:none}

.hero{min-height:60vh;display:flex;flex-direction:column;justify-content:center;align-items:flex-start;gap:1rem}
.hero h1{font-size:clamp(2.2rem,6vw,4rem);line-height:1.1;font-weight:800;letter-spacing:-.03em;max-width:18ch}
.hero p{font-size:1.15rem;color:var(--fg2)}
#accent{color:var(--accent)}
.btn{display:inline-block;padding:.7rem 1.4rem;border-radius:8px;background:var(--accent);color:#fff;font-weight:600;border:none;cursor:pointer;font-size:1rem}
.btn:hover{background:var(--accent-hover);text-decoration:none}
.btn[disabled]{opacity:.5;cursor:not-allowed}
#black-btn{background:#000;color:#fff;border:1px solid var(--border)}

.card-list h2{font-size:1.75rem;font-weight:700;margin-bottom:1.5rem}
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:1.25rem}
.card{display:flex;flex-direction:column;background:var(--surface);border:1px solid var(--border);border-radius:12px;overflow:hidden;color:var(--fg);transition:border-color .15s}
.card:hover{border-color:var(--accent);text-decoration:none}
.card img{width:100%;aspect-ratio:16/9;object-fit:cover;display:block}
.card-body{padding:1rem 1.1rem 1.2rem;display:flex;flex-direction:column;gap:.35rem}
.card-body h3{font-size:1.15rem;font-weight:700}
.card-sub{color:var(--fg2);font-size:.95rem}
.card-overview{color:var(--fg2);font-size:.9rem}
.card-date{color:var(--fg3);font-size:.8rem;margin-top:auto}
.card-empty{color:var(--fg3)}
.read-more{display:inline-block;margin-top:1.25rem;font-weight:600}

.connect{text-align:center}
.connect h1{font-size:2rem}
.connect p{color:var(--fg2)}
.socials{display:flex;justify-content:center;flex-wrap:wrap;gap:1rem;margin-top:1.5rem}
.social{padding:.55rem 1rem;border:1px solid var(--border);border-radius:8px;color:var(--fg)}
.social:hover{border-color:var(--accent);text-decoration:none}

.sub-cta{display:flex;flex-direction:column;align-items:center;gap:1rem;text-align:center}
.sub-cta h1{font-size:2rem}
.sub-cta p{max-width:650px;color:var(--fg2)}
.inline-form{display:flex;gap:.75rem;flex-wrap:wrap;justify-content:center;width:100%;max-width:520px}
.inline-form input{flex:1;min-width:220px;padding:.7rem .9rem;border-radius:8px;border:1px solid var(--border);background:var(--surface);color:var(--fg);font-size:1rem}
.sub-success{color:var(--fg)}
.sub-error{color:#f87171}
.loader{display:flex;gap:.4rem;padding:1rem}
.loader span{width:10px;height:10px;border-radius:50%;background:var(--accent);animation:pulse 1s infinite ease-in-out}
.loader span:nth-child(2){animation-delay:.15s}
.loader span:nth-child(3){animation-delay:.3s}
@keyframes pulse{0%,100%{opacity:.2;transform:scale(.8)}50%{opacity:1;transform:scale(1)}}

.entry{max-width:760px;margin:0 auto;padding:2rem 1.25rem 4rem}
.entry-image{width:100%;max-height:360px;object-fit:cover;border-radius:12px;margin-bottom:1.5rem}
.entry h1{font-size:2.2rem;line-height:1.2;letter-spacing:-.02em}
.entry-sub{color:var(--fg2);font-size:1.15rem;margin-top:.5rem}
.entry-date{color:var(--fg3);font-size:.85rem;margin-top:.5rem;display:block}
.entry-body{margin-top:2rem;font-size:1.05rem;line-height:1.75}
.entry-body h1,.entry-body h2,.entry-body h3{margin:1.75rem 0 .75rem;font-weight:700}
.entry-body p,.entry-body ul,.entry-body ol,.entry-body pre,.entry-body blockquote{margin:.85rem 0}
.entry-body ul,.entry-body ol{padding-left:1.5rem}
.entry-body pre{background:var(--surface);border:1px solid var(--border);border-radius:8px;padding:.85rem 1rem;overflow-x:auto;font-size:.88rem}
.entry-body code{font-family:var(--mono);font-size:.9em}
.entry-body blockquote{border-left:3px solid var(--accent);padding-left:1rem;color:var(--fg2)}
.entry-body table{border-collapse:collapse;width:100%}
.entry-body th,.entry-body td{border:1px solid var(--border);padding:.4rem .75rem;text-align:left}
.back-link{display:inline-block;margin-top:2.5rem}

.footer{text-align:center;padding:2rem 1rem;font-size:.85rem;color:var(--fg3);border-top:1px solid var(--border)}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#0b0b0f;color:#ececf1;padding:1rem}
.error-page{text-align:center;max-width:420px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#a3a3b2;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#8b5cf6}
"#;

/// Content-Security-Policy header value.
///
/// No scripts at all. Forms may only post back to this site.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: data:; form-action 'self'; base-uri 'none'; frame-ancestors 'none'";

/// Render the full HTML page shell with `<head>`, OG tags, header and footer.
pub fn page_shell(
    config: &Config,
    title: &str,
    description: &str,
    canonical_url: &str,
    og_image: Option<&str>,
    body_content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);
                link rel="icon" href="/favicon.ico";

                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(config.site_name);
                meta property="og:type" content="website";
                @if let Some(image) = og_image.filter(|i| is_safe_url(i)) {
                    meta property="og:image" content=(image);
                    meta name="twitter:card" content="summary_large_image";
                } @else {
                    meta name="twitter:card" content="summary";
                }

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (site_header(&config.site_name))
                main { (body_content) }
                (footer(&config.site_name))
            }
        }
    }
}

/// Site name plus in-page navigation.
pub fn site_header(site_name: &str) -> Markup {
    html! {
        header class="site-header" {
            a class="site-name" href="/" { (site_name) }
            nav class="site-nav" {
                a href="/#projects" { "Projects" }
                a href="/#blog" { "Blog" }
                a href="/#about-me" { "Connect" }
            }
        }
    }
}

/// Copyright footer.
pub fn footer(site_name: &str) -> Markup {
    let year = chrono::Utc::now().year();
    html! {
        footer class="footer" {
            "© " (year) " " (site_name) ". All rights reserved."
        }
    }
}

/// Check if an image URL is safe to use in `src` attributes.
///
/// Only `https://` passes, matching the `img-src` directive of [`CSP_HEADER`].
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://")
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", s[..end].trim_end())
    }
}
