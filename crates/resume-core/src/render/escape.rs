//! LaTeX escaping applied to every string leaf of a generated resume
//!
//! The renderer treats escaped input as a precondition; unescaped control
//! characters in template values would corrupt the compiled document. The
//! visitor walks the known `Resume` shape and applies the substitution
//! table only at string leaves.

use resume_types::{Contacts, Education, Experience, Project, Resume};

/// Character substitution table for LaTeX special characters
pub const LATEX_ESCAPE_MAP: &[(char, &str)] = &[
    ('%', "\\%"),
    ('$', "\\$"),
    ('&', "\\&"),
    ('#', "\\#"),
    ('_', "\\_"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('~', "\\textasciitilde{}"),
    ('^', "\\textasciicircum{}"),
];

/// Escape one string leaf. Quote characters are stripped outright.
pub fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '"' || ch == '\'' {
            continue;
        }
        match LATEX_ESCAPE_MAP.iter().find(|(c, _)| *c == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

fn escape_opt(text: &Option<String>) -> Option<String> {
    text.as_deref().map(escape_str)
}

fn escape_list(items: &Option<Vec<String>>) -> Option<Vec<String>> {
    items
        .as_ref()
        .map(|list| list.iter().map(|s| escape_str(s)).collect())
}

/// Produce an escaped copy of the resume, safe to feed to the renderer
pub fn escape_resume(resume: &Resume) -> Resume {
    Resume {
        name: escape_str(&resume.name),
        contact_info: escape_contacts(&resume.contact_info),
        title: escape_str(&resume.title),
        summary: escape_str(&resume.summary),
        skills: escape_list(&resume.skills),
        experience: resume
            .experience
            .as_ref()
            .map(|list| list.iter().map(escape_experience).collect()),
        education: resume
            .education
            .as_ref()
            .map(|list| list.iter().map(escape_education).collect()),
        languages: escape_list(&resume.languages),
        certifications: escape_list(&resume.certifications),
        hobbies: escape_list(&resume.hobbies),
        portfolio: resume
            .portfolio
            .as_ref()
            .map(|list| list.iter().map(escape_project).collect()),
    }
}

fn escape_contacts(contacts: &Contacts) -> Contacts {
    Contacts {
        phone: escape_str(&contacts.phone),
        email: escape_str(&contacts.email),
        linkedin: escape_opt(&contacts.linkedin),
        github: escape_opt(&contacts.github),
        location: escape_str(&contacts.location),
    }
}

fn escape_experience(entry: &Experience) -> Experience {
    Experience {
        job_title: escape_str(&entry.job_title),
        company: escape_str(&entry.company),
        start_date: escape_str(&entry.start_date),
        end_date: escape_opt(&entry.end_date),
        achievements: escape_list(&entry.achievements),
    }
}

fn escape_education(entry: &Education) -> Education {
    Education {
        degree: escape_opt(&entry.degree),
        institution: escape_str(&entry.institution),
        start_date: escape_str(&entry.start_date),
        end_date: escape_opt(&entry.end_date),
        details: escape_str(&entry.details),
    }
}

fn escape_project(project: &Project) -> Project {
    Project {
        name: escape_opt(&project.name),
        link: escape_opt(&project.link),
        description: escape_opt(&project.description),
    }
}
