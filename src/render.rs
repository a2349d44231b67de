// src/render.rs
//
// Server-side HTML for the contact and guestbook pages. Class names and the
// `required` attributes are the hooks the client script attaches to; validation here
// does not depend on them.

use crate::handlers::{GuestbookView, Outcome};
use crate::i18n::{Language, Strings};
use crate::models::StoredEntry;

/// HTML-entity encodes `& < > " '`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn head(lang: Language, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{tag}" data-lang="{tag}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/style.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css">
</head>
<body>
"#,
        tag = lang.tag(),
    )
}

fn nav(lang: Language, t: &Strings) -> String {
    let tag = lang.tag();
    format!(
        r#"    <nav class="navbar">
        <div class="nav-container">
            <div class="nav-logo">
                <img src="/images/logo.jpg" alt="INTELLIGENTSIA SA Logo">
                <span>INTELLIGENTSIA SA</span>
            </div>
            <ul class="nav-menu">
                <li><a href="/index.html">{home}</a></li>
                <li><a href="/index.html#about">{about}</a></li>
                <li><a href="/index.html#departments">{departments}</a></li>
                <li><a href="/index.html#services">{services}</a></li>
                <li><a href="/index.html#products">{products}</a></li>
                <li><a href="/index.html#team">{team}</a></li>
                <li><a href="/contact?lang={tag}">{contact}</a></li>
                <li><a href="/guestbook?lang={tag}">{guestbook}</a></li>
            </ul>
            <div class="lang-switch">
                <a href="?lang=fr">FR</a> | <a href="?lang=en">EN</a>
            </div>
            <div class="hamburger">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    </nav>
"#,
        home = t.home,
        about = t.about,
        departments = t.departments,
        services = t.services,
        products = t.products,
        team = t.team,
        contact = t.contact,
        guestbook = t.guestbook,
    )
}

fn footer(lang: Language, t: &Strings) -> String {
    let tag = lang.tag();
    format!(
        r#"    <footer class="footer">
        <div class="container">
            <div class="footer-content">
                <div class="footer-section">
                    <h3>INTELLIGENTSIA SA</h3>
                    <p>{footer_desc}</p>
                </div>
                <div class="footer-section">
                    <h4>{quick_links}</h4>
                    <ul>
                        <li><a href="/index.html#about">{about}</a></li>
                        <li><a href="/index.html#services">{services}</a></li>
                        <li><a href="/index.html#products">{products}</a></li>
                        <li><a href="/index.html#team">{team}</a></li>
                        <li><a href="/contact?lang={tag}">{contact}</a></li>
                        <li><a href="/guestbook?lang={tag}">{guestbook}</a></li>
                    </ul>
                </div>
                <div class="footer-section">
                    <h4>{contact}</h4>
                    <p>{address_text}</p>
                    <p>{phone}: (+237) 243 548 814</p>
                    <p>{email}: info@intelligentsia.biz</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>&copy; 2025 INTELLIGENTSIA SA. {rights}</p>
            </div>
        </div>
    </footer>
    <script src="/script.js"></script>
</body>
</html>
"#,
        footer_desc = t.footer_desc,
        quick_links = t.quick_links,
        about = t.about,
        services = t.services,
        products = t.products,
        team = t.team,
        contact = t.contact,
        guestbook = t.guestbook,
        address_text = t.address_text,
        phone = t.phone,
        email = t.email,
        rights = t.rights,
    )
}

fn notice(outcome: &Outcome, success: &str, t: &Strings) -> String {
    match outcome {
        Outcome::Shown => String::new(),
        Outcome::Accepted => format!(r#"<p class="notice success">{success}</p>"#),
        Outcome::Rejected(_) => format!(r#"<p class="notice error">{}</p>"#, t.missing_fields),
        Outcome::Failed => format!(r#"<p class="notice error">{}</p>"#, t.storage_failure),
    }
}

pub fn contact_page(lang: Language, outcome: &Outcome) -> String {
    let t = lang.strings();
    let body = format!(
        r#"    <section id="contact" class="contact">
        <div class="container">
            <h2>{contact_title}</h2>
            <div class="contact-content">
                <div class="contact-info">
                    <h3>{get_in_touch}</h3>
                    <div class="contact-item">
                        <i class="fas fa-map-marker-alt"></i>
                        <div>
                            <h4>{address}</h4>
                            <p>{address_text}</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <i class="fas fa-phone"></i>
                        <div>
                            <h4>{phone}</h4>
                            <p>(+237) 243 548 814</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <i class="fas fa-envelope"></i>
                        <div>
                            <h4>{email}</h4>
                            <p>info@intelligentsia.biz</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <i class="fas fa-building"></i>
                        <div>
                            <h4>{registration}</h4>
                            <p>{registration_text}</p>
                        </div>
                    </div>
                </div>
                <div class="contact-form">
                    <h3>{send_message}</h3>
                    {notice}
                    <form action="/contact?lang={tag}" method="post">
                        <div class="form-group">
                            <input type="text" name="name" placeholder="{your_name}" required>
                        </div>
                        <div class="form-group">
                            <input type="email" name="email" placeholder="{your_email}" required>
                        </div>
                        <div class="form-group">
                            <input type="text" name="subject" placeholder="{subject}">
                        </div>
                        <div class="form-group">
                            <textarea name="message" placeholder="{your_message}" rows="5" required></textarea>
                        </div>
                        <button type="submit" class="submit-btn">{send_btn}</button>
                    </form>
                </div>
            </div>
        </div>
    </section>
"#,
        tag = lang.tag(),
        contact_title = t.contact_title,
        get_in_touch = t.get_in_touch,
        address = t.address,
        address_text = t.address_text,
        phone = t.phone,
        email = t.email,
        registration = t.registration,
        registration_text = t.registration_text,
        send_message = t.send_message,
        notice = notice(outcome, t.contact_success, t),
        your_name = t.your_name,
        your_email = t.your_email,
        subject = t.subject,
        your_message = t.your_message,
        send_btn = t.send_btn,
    );

    [head(lang, t.contact_page_title), nav(lang, t), body, footer(lang, t)].concat()
}

/// One entry of the guestbook list. Stored values were escaped on write and
/// are escaped again here.
fn message_item(entry: &StoredEntry) -> String {
    let mut item = String::from(r#"<div class="message-item">"#);
    if let Some(name) = &entry.name {
        item.push_str(&format!("<strong>{}</strong><br>", escape_html(name)));
    }
    if let Some(message) = &entry.message {
        item.push_str(&format!("<p>{}</p>", escape_html(message)));
    }
    if let Some(date) = &entry.date {
        item.push_str(&format!("<small>{}</small>", escape_html(date)));
    }
    item.push_str("</div>");
    item
}

pub fn guestbook_page(lang: Language, view: &GuestbookView) -> String {
    let t = lang.strings();
    let items: String = if view.list_failed {
        format!(
            "                        <p class=\"notice error\">{}</p>\n",
            t.list_failure
        )
    } else {
        view.entries
            .iter()
            .map(|e| format!("                        {}\n", message_item(e)))
            .collect()
    };

    let body = format!(
        r#"    <section class="guestbook">
        <div class="container">
            <h2>{guestbook_title}</h2>
            <div class="guestbook-content">
                <div class="guestbook-form">
                    <h3>{leave_message}</h3>
                    {notice}
                    <form action="/guestbook?lang={tag}" method="post">
                        <div class="form-group">
                            <input type="text" name="name" placeholder="{your_name}" required>
                        </div>
                        <div class="form-group">
                            <textarea name="message" placeholder="{your_message}" rows="5" required></textarea>
                        </div>
                        <button type="submit" class="submit-btn">{submit_btn}</button>
                    </form>
                </div>
                <div class="guestbook-messages">
                    <h3>{previous_messages}</h3>
                    <div class="messages-list">
{items}                    </div>
                </div>
            </div>
        </div>
    </section>
"#,
        tag = lang.tag(),
        guestbook_title = t.guestbook_title,
        leave_message = t.leave_message,
        notice = notice(&view.outcome, t.guestbook_success, t),
        your_name = t.your_name,
        your_message = t.your_message,
        submit_btn = t.submit_btn,
        previous_messages = t.previous_messages,
    );

    [head(lang, t.guestbook_page_title), nav(lang, t), body, footer(lang, t)].concat()
}
