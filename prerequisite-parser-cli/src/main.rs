use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use prerequisite_parser::catalog::section::SectionLabel;
use prerequisite_parser::catalog::vocabulary::{
    CatalogVocabulary, DEFAULT_NUMBER_PARAMETER, DEFAULT_SUBJECT_PARAMETER,
};
use prerequisite_parser::catalog::{parse_course_detail, CourseDetail};
use prerequisite_parser::interpreter::syntax::prerequisite_tree::Node;
use std::io::Read;
use std::path::PathBuf;

/// Reads the prerequisites and corequisites of a course from its catalog detail page
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The course detail page to read. Reads standard input if omitted or "-"
    path: Option<PathBuf>,

    /// Which requisites to print
    #[clap(long, value_enum, default_value = "both")]
    section: Section,

    /// How to print the requisite trees
    #[clap(long, value_enum, default_value = "tree")]
    format: Format,

    /// Query parameter holding the subject code in course links
    #[clap(long, default_value = DEFAULT_SUBJECT_PARAMETER)]
    subject_parameter: String,

    /// Query parameter holding the course number in course links
    #[clap(long, default_value = DEFAULT_NUMBER_PARAMETER)]
    number_parameter: String,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Prerequisites,
    Corequisites,
    Both,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// An indented tree
    Tree,
    /// A single line with explicit parentheses
    Compact,
    /// The catalog's JSON shape
    Json,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let page = read_page(&args.path)?;
    let vocabulary = CatalogVocabulary::new(&args.subject_parameter, &args.number_parameter);
    let detail = parse_course_detail(&page, &vocabulary)?;
    log::info!("read course detail page of {} bytes", page.len());

    print!("{}", render(&detail, args.section, args.format)?);
    Ok(())
}

fn read_page(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display())),
        _ => {
            let mut page = String::new();
            std::io::stdin()
                .read_to_string(&mut page)
                .context("could not read standard input")?;
            Ok(page)
        }
    }
}

fn selected_sections(section: Section) -> Vec<SectionLabel> {
    match section {
        Section::Prerequisites => vec![SectionLabel::Prerequisites],
        Section::Corequisites => vec![SectionLabel::Corequisites],
        Section::Both => vec![SectionLabel::Prerequisites, SectionLabel::Corequisites],
    }
}

fn requisites(detail: &CourseDetail, label: SectionLabel) -> Option<&Node> {
    match label {
        SectionLabel::Prerequisites => detail.prerequisites.as_ref(),
        SectionLabel::Corequisites => detail.corequisites.as_ref(),
        SectionLabel::Restrictions => None,
    }
}

fn render(detail: &CourseDetail, section: Section, format: Format) -> Result<String> {
    let labels = selected_sections(section);

    if format == Format::Json {
        let mut object = serde_json::Map::new();
        for label in labels {
            let value = serde_json::to_value(requisites(detail, label))
                .context("could not serialize requisites")?;
            object.insert(label.to_string().to_lowercase(), value);
        }
        let json = serde_json::to_string_pretty(&object).context("could not serialize requisites")?;
        return Ok(format!("{}\n", json));
    }

    let mut output = String::new();
    for label in labels {
        let rendered = match (requisites(detail, label), format) {
            (None, _) => "none\n".to_string(),
            (Some(node), Format::Compact) => format!("{}\n", node.to_compact_string()),
            (Some(node), _) => node.to_string(),
        };
        output.push_str(&format!("{}: {}", label, rendered));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> CourseDetail {
        CourseDetail {
            prerequisites: Some(Node::new_course("ACC", "298")),
            ..CourseDetail::default()
        }
    }

    #[test]
    fn compact_format_prints_one_line_per_section() {
        let output = render(&detail(), Section::Both, Format::Compact).unwrap();

        assert_eq!(output, "Prerequisites: ACC 298\nCorequisites: none\n");
    }

    #[test]
    fn json_format_prints_selected_sections_only() {
        let output = render(&detail(), Section::Prerequisites, Format::Json).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json, serde_json::json!({ "prerequisites": ["ACC", "298"] }));
    }

    #[test]
    fn arguments_default_to_both_sections_as_trees() {
        let args = Arguments::parse_from(["prerequisites", "page.html"]);

        assert_eq!(args.section, Section::Both);
        assert_eq!(args.format, Format::Tree);
        assert_eq!(args.subject_parameter, DEFAULT_SUBJECT_PARAMETER);
    }
}
