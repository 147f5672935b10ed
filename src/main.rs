//! Resume Templates CLI
//!
//! Usage:
//!   resume-templates [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list      List template metadata
//!   css       Print the stylesheet for a template
//!   preview   Print the preview image for a template
//!   html      Render a resume fragment
//!   document  Render a standalone HTML document
//!   stats     Print registry statistics as JSON
//!
//! Options:
//!   -t, --templates <FILE>  Custom template file (TOML), repeatable
//!   --no-prefix             Emit class names without the `rt-` prefix

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resume_templates::renderer::svg::preview_markup;
use resume_templates::template::{builtin_templates, CustomTemplateSpec};
use resume_templates::{
    Category, DocumentMode, DocumentOptions, RenderConfig, ResumeData, TemplateMeta,
    TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "resume-templates")]
#[command(about = "Render resume templates to HTML, CSS and SVG previews")]
struct Cli {
    /// Custom template file (TOML) registered on top of the built-ins
    #[arg(short, long, global = true)]
    templates: Vec<PathBuf>,

    /// Emit class names without the `rt-` prefix
    #[arg(long, global = true)]
    no_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List template metadata
    List {
        /// Only list templates in this category
        #[arg(short, long)]
        category: Option<Category>,

        /// List the static fallback catalog instead of the registry
        #[arg(long)]
        fallback: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the stylesheet for a template
    Css { key: String },
    /// Print the preview image for a template as a data URI
    Preview {
        key: String,

        /// Print raw SVG markup instead of a data URI
        #[arg(long)]
        raw: bool,
    },
    /// Render a resume as an HTML fragment
    Html {
        key: String,

        /// Resume data file (JSON or TOML)
        #[arg(short, long)]
        resume: PathBuf,
    },
    /// Render a resume as a standalone HTML document
    Document {
        key: String,

        /// Resume data file (JSON or TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Use A4 print page rules
        #[arg(long)]
        print: bool,

        /// Document title (defaults to the resume name)
        #[arg(long)]
        title: Option<String>,
    },
    /// Print registry statistics as JSON
    Stats,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let render = if cli.no_prefix {
        RenderConfig::new().without_class_prefix()
    } else {
        RenderConfig::new()
    };

    let registry = TemplateRegistry::with_render_config(render.clone());
    registry.register_many(builtin_templates());
    for path in &cli.templates {
        registry.register(load_template(path).into_config());
    }

    match cli.command {
        Command::List {
            category,
            fallback,
            json,
        } => {
            let mut templates = if fallback {
                TemplateRegistry::fallback_templates()
            } else {
                registry.get_all_templates()
            };
            if let Some(category) = category {
                templates.retain(|meta| meta.category == category);
            }
            if json {
                print_json(&templates);
            } else {
                print_table(&templates);
            }
        }
        Command::Css { key } => {
            let css = registry.get_css(&key).unwrap_or_else(|e| fail(e));
            print!("{}", css);
        }
        Command::Preview { key, raw } => {
            if raw {
                let config = registry
                    .get_template(&key)
                    .unwrap_or_else(|| fail(format!("template not found: {}", key)));
                println!("{}", preview_markup(&config, &render));
            } else {
                let preview = registry.get_preview(&key).unwrap_or_else(|e| fail(e));
                println!("{}", preview);
            }
        }
        Command::Html { key, resume } => {
            let data = load_resume(&resume);
            let html = registry
                .generate_html(&key, &data)
                .unwrap_or_else(|e| fail(e));
            print!("{}", html);
        }
        Command::Document {
            key,
            resume,
            print,
            title,
        } => {
            let data = load_resume(&resume);
            let mode = if print {
                DocumentMode::Print
            } else {
                DocumentMode::Screen
            };
            let title = title.unwrap_or_else(|| data.primary_name.clone());
            let options = DocumentOptions::new().with_title(title).with_mode(mode);
            let doc = registry
                .render_document(&key, &data, &options)
                .unwrap_or_else(|e| fail(e));
            print!("{}", doc);
        }
        Command::Stats => print_json(&registry.get_stats()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_template(path: &Path) -> CustomTemplateSpec {
    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(format!("reading template '{}': {}", path.display(), e)),
    };
    match CustomTemplateSpec::from_toml_str(&source) {
        Ok(spec) => spec,
        Err(e) => {
            eprint!("{}", e.format(&source, &path.display().to_string()));
            std::process::exit(1);
        }
    }
}

fn load_resume(path: &Path) -> ResumeData {
    match ResumeData::from_file(path) {
        Ok(data) => data,
        Err(e) => fail(format!("loading resume '{}': {}", path.display(), e)),
    }
}

fn print_table(templates: &[TemplateMeta]) {
    let width = templates.iter().map(|m| m.key.len()).max().unwrap_or(0);
    for meta in templates {
        println!(
            "{:<width$}  {:<12}  {}",
            meta.key,
            meta.category.as_str(),
            meta.name,
            width = width
        );
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(e),
    }
}
