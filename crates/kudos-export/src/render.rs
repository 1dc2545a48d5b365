use std::path::PathBuf;

use serde::Serialize;
use tera::{Context, Tera};

use kudos_core::date::format_date;
use kudos_core::models::letter::LetterData;
use kudos_core::models::recipient::{Gender, Recipient};

use crate::error::ExportError;
use crate::options::RenderOptions;

const LETTER_TEMPLATE: &str = "letter.html";
const STYLE_TEMPLATE: &str = "letter.css";

/// HTML for one letter plus any scratch images it references.
///
/// The scratch images are deleted when the document is dropped, on both the
/// success and the error path.
#[derive(Debug, Default)]
pub struct RenderedDocument {
    pub html: String,
    pub temp_images: Vec<PathBuf>,
}

impl Drop for RenderedDocument {
    fn drop(&mut self) {
        for path in &self.temp_images {
            if path.exists()
                && let Err(e) = std::fs::remove_file(path)
            {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove temp image");
            }
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ReceiverBlock<'a> {
    Individual {
        last_name: &'a str,
        first_name: &'a str,
        middle_name: &'a str,
    },
    LegalEntity {
        company_name: &'a str,
    },
}

#[derive(Serialize)]
struct SenderBlock<'a> {
    last_name: &'a str,
    first_name: &'a str,
    middle_name: &'a str,
    signature: &'a str,
}

#[derive(Serialize)]
struct LetterContext<'a> {
    salutation: &'static str,
    receiver: ReceiverBlock<'a>,
    sender: SenderBlock<'a>,
    date: String,
    background_url: String,
}

/// Compiled letter templates. Build once and share.
pub struct LetterTemplates {
    tera: Tera,
}

impl LetterTemplates {
    pub fn new() -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (STYLE_TEMPLATE, include_str!("../templates/letter.css")),
            (LETTER_TEMPLATE, include_str!("../templates/letter.html")),
        ])
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Fill the letter template for `data`.
    ///
    /// Every interpolated value is HTML-escaped by tera; only the
    /// background URL inside the stylesheet is inserted verbatim.
    pub fn render_html(
        &self,
        data: &LetterData,
        options: &RenderOptions,
    ) -> Result<RenderedDocument, ExportError> {
        let mut document = RenderedDocument::default();

        let context = LetterContext {
            salutation: salutation(&data.recipient),
            receiver: receiver_block(&data.recipient),
            sender: SenderBlock {
                last_name: &data.sender.last_name,
                first_name: &data.sender.first_name,
                middle_name: &data.sender.middle_name,
                signature: &data.sender.signature,
            },
            date: format_date(&data.date)?,
            background_url: options.background_url()?,
        };

        let context = Context::from_serialize(&context)?;
        document.html = self.tera.render(LETTER_TEMPLATE, &context)?;

        tracing::debug!(
            entity_type = %data.entity_type(),
            html_len = document.html.len(),
            "letter html rendered"
        );
        Ok(document)
    }
}

/// Opening word above the recipient block.
pub fn salutation(recipient: &Recipient) -> &'static str {
    match recipient {
        Recipient::Individual(person) => match person.gender {
            Gender::Male => "Уважаемый",
            Gender::Female => "Уважаемая",
        },
        Recipient::LegalEntity(_) => "Коллективу",
    }
}

fn receiver_block(recipient: &Recipient) -> ReceiverBlock<'_> {
    match recipient {
        Recipient::Individual(person) => ReceiverBlock::Individual {
            last_name: &person.last_name,
            first_name: &person.first_name,
            middle_name: &person.middle_name,
        },
        Recipient::LegalEntity(company) => ReceiverBlock::LegalEntity {
            company_name: &company.company_name,
        },
    }
}
