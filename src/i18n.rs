// src/i18n.rs
//
// Fixed page text in both site languages. Values are trusted markup and are
// inserted into pages without escaping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Fr,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Resolves an optional `lang` tag, falling back to `default` when the
    /// tag is absent or unknown.
    pub fn resolve(tag: Option<&str>, default: Language) -> Language {
        tag.and_then(|t| t.parse().ok()).unwrap_or(default)
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

pub struct Strings {
    pub home: &'static str,
    pub about: &'static str,
    pub departments: &'static str,
    pub services: &'static str,
    pub products: &'static str,
    pub team: &'static str,
    pub contact: &'static str,
    pub guestbook: &'static str,

    pub contact_page_title: &'static str,
    pub contact_title: &'static str,
    pub get_in_touch: &'static str,
    pub address: &'static str,
    pub address_text: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub registration: &'static str,
    pub registration_text: &'static str,
    pub send_message: &'static str,
    pub your_name: &'static str,
    pub your_email: &'static str,
    pub subject: &'static str,
    pub your_message: &'static str,
    pub send_btn: &'static str,
    pub contact_success: &'static str,

    pub guestbook_page_title: &'static str,
    pub guestbook_title: &'static str,
    pub leave_message: &'static str,
    pub previous_messages: &'static str,
    pub submit_btn: &'static str,
    pub guestbook_success: &'static str,

    pub missing_fields: &'static str,
    pub storage_failure: &'static str,
    pub list_failure: &'static str,

    pub footer_desc: &'static str,
    pub quick_links: &'static str,
    pub rights: &'static str,
}

pub static EN: Strings = Strings {
    home: "Home",
    about: "About Us",
    departments: "Departments",
    services: "Services",
    products: "Products",
    team: "Team",
    contact: "Contact",
    guestbook: "Guestbook",

    contact_page_title: "Contact Form - INTELLIGENTSIA SA",
    contact_title: "Contact Us",
    get_in_touch: "Get In Touch",
    address: "Address",
    address_text: "Avenue Charles de Gaulle – BP 11 543<br>Yaoundé – Cameroon",
    phone: "Phone",
    email: "Email",
    registration: "Registration",
    registration_text: "Commercial Register: YAO01/04/879<br>Taxpayer No: M010200014100S",
    send_message: "Send us a Message",
    your_name: "Your Name",
    your_email: "Your Email",
    subject: "Subject",
    your_message: "Your Message",
    send_btn: "Send Message",
    contact_success: "Thank you for your message! We will get back to you soon.",

    guestbook_page_title: "Guestbook - INTELLIGENTSIA SA",
    guestbook_title: "Guestbook",
    leave_message: "Leave a Message",
    previous_messages: "Previous Messages",
    submit_btn: "Submit",
    guestbook_success: "Thank you for your message!",

    missing_fields: "Please fill in all required fields.",
    storage_failure: "Sorry, your message could not be saved. Please try again later.",
    list_failure: "Messages could not be loaded. Please try again later.",

    footer_desc: "Leading digital technology integration in Central Africa since 2002.",
    quick_links: "Quick Links",
    rights: "All rights reserved.",
};

pub static FR: Strings = Strings {
    home: "Accueil",
    about: "À Propos",
    departments: "Départements",
    services: "Services",
    products: "Produits",
    team: "Équipe",
    contact: "Contact",
    guestbook: "Livre d'Or",

    contact_page_title: "Formulaire de Contact - INTELLIGENTSIA SA",
    contact_title: "Contactez-Nous",
    get_in_touch: "Contactez-Nous",
    address: "Adresse",
    address_text: "Avenue Charles de Gaulle – BP 11 543<br>Yaoundé – Cameroun",
    phone: "Téléphone",
    email: "Email",
    registration: "Enregistrement",
    registration_text: "Registre de Commerce: YAO01/04/879<br>N° Contribuable: M010200014100S",
    send_message: "Envoyez-nous un Message",
    your_name: "Votre Nom",
    your_email: "Votre Email",
    subject: "Sujet",
    your_message: "Votre Message",
    send_btn: "Envoyer le Message",
    contact_success: "Merci pour votre message ! Nous vous répondrons très bientôt.",

    guestbook_page_title: "Livre d'Or - INTELLIGENTSIA SA",
    guestbook_title: "Livre d'Or",
    leave_message: "Laissez un Message",
    previous_messages: "Messages Précédents",
    submit_btn: "Envoyer",
    guestbook_success: "Merci pour votre message !",

    missing_fields: "Veuillez remplir tous les champs obligatoires.",
    storage_failure: "Désolé, votre message n'a pas pu être enregistré. Veuillez réessayer plus tard.",
    list_failure: "Les messages n'ont pas pu être chargés. Veuillez réessayer plus tard.",

    footer_desc: "Leader de l'intégration technologique en Afrique Centrale depuis 2002.",
    quick_links: "Liens Rapides",
    rights: "Tous droits réservés.",
};
