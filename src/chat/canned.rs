use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::portfolio::PortfolioData;

use super::ChatBackend;

const REPLY_DELAY: Duration = Duration::from_millis(1000);
const LISTED_SKILLS: usize = 8;

/// Answers from the portfolio document itself, after a short pause so it
/// reads like a round trip.
pub struct CannedResponder {
    book: Arc<ReplyBook>,
    delay: Duration,
}

impl CannedResponder {
    pub fn new(portfolio: &PortfolioData) -> Self {
        Self::with_delay(portfolio, REPLY_DELAY)
    }

    pub fn with_delay(portfolio: &PortfolioData, delay: Duration) -> Self {
        Self {
            book: Arc::new(ReplyBook::from_portfolio(portfolio)),
            delay,
        }
    }
}

impl ChatBackend for CannedResponder {
    fn send(&self, text: &str) -> Receiver<Result<String, String>> {
        let (tx, rx) = mpsc::channel();
        let book = Arc::clone(&self.book);
        let delay = self.delay;
        let question = text.to_owned();

        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let reply = book.answer(&question, &mut rand::thread_rng());
            let _ = tx.send(reply);
        });

        rx
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Topic {
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

const TOPICS: [(Topic, &[&str]); 5] = [
    (Topic::Skills, &["skill", "stack", "tech", "language", "know"]),
    (Topic::Projects, &["project", "built", "build", "portfolio"]),
    (Topic::Experience, &["experience", "work", "job", "role", "company"]),
    (Topic::Education, &["education", "study", "degree", "university", "school"]),
    (Topic::Contact, &["contact", "email", "reach", "hire", "linkedin"]),
];

struct ReplyBook {
    skills: Option<String>,
    projects: Option<String>,
    experience: Option<String>,
    education: Option<String>,
    contact: Option<String>,
    generic: Vec<String>,
}

impl ReplyBook {
    fn from_portfolio(portfolio: &PortfolioData) -> Self {
        let skills = portfolio
            .skills
            .all_skills()
            .take(LISTED_SKILLS)
            .collect::<Vec<_>>();
        let skills = (!skills.is_empty())
            .then(|| format!("My core skills include {}.", join_list(&skills)));

        let projects = portfolio.projects.first().map(|project| {
            let mut reply = format!("One project I'm proud of is {}", project.title);
            if !project.description.is_empty() {
                reply.push_str(": ");
                reply.push_str(project.description.trim_end_matches('.'));
            }
            reply.push('.');
            if portfolio.projects.len() > 1 {
                let others = portfolio.projects[1..]
                    .iter()
                    .map(|project| project.title.as_str())
                    .collect::<Vec<_>>();
                reply.push_str(&format!(" I've also worked on {}.", join_list(&others)));
            }
            reply
        });

        let experience = portfolio.experience.first().map(|entry| {
            format!(
                "Most recently I worked as {} at {} ({}).",
                entry.role, entry.company, entry.duration
            )
        });

        let education = portfolio.education.first().map(|entry| {
            format!(
                "I studied {} at {} ({}).",
                entry.degree, entry.institution, entry.duration
            )
        });

        let contact = &portfolio.contact;
        let contact = (!contact.email.is_empty()).then(|| {
            let mut reply = format!("You can reach me at {}", contact.email);
            if !contact.linkedin.is_empty() {
                reply.push_str(&format!(" or on LinkedIn at {}", contact.linkedin));
            }
            reply.push('.');
            reply
        });

        let mut generic = vec![
            "Ask me about my skills, projects, experience or education.".to_owned(),
            "I enjoy building products end to end, from the interface down to the infrastructure."
                .to_owned(),
        ];
        if !portfolio.role.is_empty() {
            generic.push(format!("I'm working as a {} these days.", portfolio.role));
        }

        Self {
            skills,
            projects,
            experience,
            education,
            contact,
            generic,
        }
    }

    fn answer<R: Rng + ?Sized>(&self, question: &str, rng: &mut R) -> Result<String, String> {
        if question.trim().is_empty() {
            return Err("empty message".to_owned());
        }

        let topical = detect_topic(question).and_then(|topic| match topic {
            Topic::Skills => self.skills.clone(),
            Topic::Projects => self.projects.clone(),
            Topic::Experience => self.experience.clone(),
            Topic::Education => self.education.clone(),
            Topic::Contact => self.contact.clone(),
        });
        if let Some(reply) = topical {
            return Ok(reply);
        }

        self.generic
            .choose(rng)
            .cloned()
            .ok_or_else(|| "no replies available".to_owned())
    }
}

fn detect_topic(question: &str) -> Option<Topic> {
    let lowered = question.to_lowercase();
    TOPICS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(topic, _)| *topic)
}

fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [single] => (*single).to_owned(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}
