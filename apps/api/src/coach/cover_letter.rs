//! Cover-letter generation — template letter calibrated to a requested tone.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::errors::AppError;

/// Simulated network latency.
const LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverLetterTone {
    Formal,
    Creative,
    Short,
}

/// Phrasing calibrated to a tone. The letter skeleton stays the same; only
/// the voice changes.
struct ToneVoice {
    opening: &'static str,
    enthusiasm: &'static str,
    sign_off: &'static str,
}

fn voice_for(tone: CoverLetterTone) -> ToneVoice {
    match tone {
        CoverLetterTone::Formal => ToneVoice {
            opening: "I am writing to express my enthusiastic interest in",
            enthusiasm: "I am confident that I possess the skills and qualifications necessary to make a significant contribution to your team.",
            sign_off: "Sincerely,",
        },
        CoverLetterTone::Creative => ToneVoice {
            opening: "I couldn't scroll past the opening for",
            enthusiasm: "I would love the chance to bring that same energy and craft to your team.",
            sign_off: "With excitement,",
        },
        CoverLetterTone::Short => ToneVoice {
            opening: "I am applying for",
            enthusiasm: "My experience maps directly onto what you are looking for.",
            sign_off: "Best regards,",
        },
    }
}

/// Generates a template cover letter for the given job description.
/// Rejects an empty/whitespace-only description.
pub async fn generate_cover_letter(
    job_description: &str,
    tone: CoverLetterTone,
) -> Result<String, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide a job description to generate a cover letter.".to_string(),
        ));
    }
    sleep(LATENCY).await;
    Ok(build_letter(tone))
}

fn build_letter(tone: CoverLetterTone) -> String {
    let voice = voice_for(tone);
    let mut letter = format!(
        "[Your Name]\n[Your Address] | [Your Phone Number] | [Your Email]\n\n[Date]\n\n\
[Hiring Manager Name] (If known, otherwise use title)\n[Hiring Manager Title]\n\
[Company Name]\n[Company Address]\n\nDear [Mr./Ms./Mx. Last Name],\n\n\
{opening} the [Job Title] position at [Company Name], which I discovered on \
[Platform where you saw the ad]. Having followed [Company Name]'s innovative work in \
[Industry] for some time, I have been consistently impressed by your commitment to \
[mention a company value, project, or achievement]. Given my [Number] years of experience \
in [Your Field], {enthusiasm}\n",
        opening = voice.opening,
        enthusiasm = voice.enthusiasm,
    );

    if tone != CoverLetterTone::Short {
        letter.push_str(
            "\nIn my previous role at [Previous Company], I was responsible for [mention a key \
responsibility]. One of my proudest achievements was [describe a specific accomplishment with a \
quantifiable result, e.g., \"leading a project that increased user engagement by 20%\"]. This \
experience has honed my abilities in [mention 2-3 key skills from the job description], which I \
see are essential for this role.\n\nI am particularly drawn to this opportunity at [Company Name] \
because of [mention something specific about the company, its culture, or the role that excites \
you]. My expertise in [mention another relevant skill] aligns perfectly with the requirements \
you've outlined, and I am eager to bring my passion for [Your Field] to a forward-thinking \
company like yours.\n",
        );
    }

    letter.push_str(&format!(
        "\nThank you for considering my application. I have attached my resume for your review and \
would welcome the opportunity to discuss how my experience and dedication can benefit \
[Company Name]. I look forward to hearing from you soon.\n\n{}\n[Your Name]",
        voice.sign_off
    ));
    letter
}
