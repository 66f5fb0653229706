//! Documentation template rendering
//!
//! Templates use a small subset of Jinja syntax:
//!
//! - `{{ name }}` inserts a variable; undefined variables are errors
//! - `{{ include_file('path') }}` inserts a file verbatim, relative to the root
//! - `{% ... %}` and `{# ... #}` tags are errors
//!
//! `build-docs` renders every `*.md.j2` file of the template directory into
//! the project root (`docs/usage.md.j2` -> `usage.md`), or `README.md.j2`
//! into `README.md`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::{Captures, Regex};
use tracing::debug;

use crate::command::CommandRunner;
use crate::config::DocsConfig;
use crate::error::{ReleaseError, Result};

/// Suffix of renderable documentation templates
pub const TEMPLATE_SUFFIX: &str = ".md.j2";

/// Template rendered by `build-docs --readme`
pub const README_TEMPLATE: &str = "README.md.j2";

/// Template variables by name
pub type Vars = BTreeMap<String, String>;

/// Renders templates whose includes resolve against a root directory
pub struct TemplateRenderer {
    root: PathBuf,
    expression: Regex,
    unsupported_tag: Regex,
    identifier: Regex,
    include: Regex,
}

impl TemplateRenderer {
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let compile =
            |pattern: &str| Regex::new(pattern).map_err(|e| ReleaseError::template(e.to_string()));

        Ok(TemplateRenderer {
            root: root.as_ref().to_path_buf(),
            expression: compile(r"\{\{\s*(.*?)\s*\}\}")?,
            unsupported_tag: compile(r"\{[%#]")?,
            identifier: compile(r"^[A-Za-z_][A-Za-z0-9_]*$")?,
            include: compile(r#"^include_file\(\s*(?:'([^']*)'|"([^"]*)")\s*\)$"#)?,
        })
    }

    /// Render template text, failing on the first bad expression
    ///
    /// Statement (`{% ... %}`) and comment (`{# ... #}`) tags are not
    /// supported and are rejected instead of being copied through.
    pub fn render_str(&self, template: &str, vars: &Vars) -> Result<String> {
        if let Some(m) = self.unsupported_tag.find(template) {
            let line = template[..m.start()].matches('\n').count() + 1;
            return Err(ReleaseError::template(format!(
                "unsupported tag '{}' on line {}",
                m.as_str(),
                line
            )));
        }

        let mut failure = None;

        let rendered = self.expression.replace_all(template, |caps: &Captures| {
            match self.evaluate(&caps[1], vars) {
                Ok(value) => value,
                Err(e) => {
                    failure.get_or_insert(e);
                    String::new()
                }
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(rendered.into_owned()),
        }
    }

    /// Render the template at `template_path` into `output_path`
    pub fn render_file(&self, template_path: &Path, vars: &Vars, output_path: &Path) -> Result<()> {
        let template = fs::read_to_string(self.root.join(template_path))?;
        let rendered = self.render_str(&template, vars).map_err(|e| match e {
            ReleaseError::Template(msg) => {
                ReleaseError::template(format!("{}: {}", template_path.display(), msg))
            }
            other => other,
        })?;

        fs::write(self.root.join(output_path), rendered)?;
        debug!(
            template = %template_path.display(),
            output = %output_path.display(),
            "rendered template"
        );
        Ok(())
    }

    fn evaluate(&self, expr: &str, vars: &Vars) -> Result<String> {
        if self.identifier.is_match(expr) {
            return vars
                .get(expr)
                .cloned()
                .ok_or_else(|| ReleaseError::template(format!("undefined variable '{}'", expr)));
        }

        if let Some(caps) = self.include.captures(expr) {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            return Ok(fs::read_to_string(self.root.join(name))?);
        }

        Err(ReleaseError::template(format!(
            "unsupported expression '{{{{ {} }}}}'",
            expr
        )))
    }
}

/// Project name: the last '/' component of the trimmed output of `command`
pub fn project_name(runner: &CommandRunner, command: &[String]) -> Result<String> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| ReleaseError::config("docs.name_command is empty"))?;

    let out = runner.run(program, args)?;
    let name = out.trim().rsplit('/').next().unwrap_or_default();
    if name.is_empty() {
        return Err(ReleaseError::config(format!(
            "`{}` did not print a project name",
            command.join(" ")
        )));
    }
    Ok(name.to_string())
}

/// Templates in `dir` (relative to `root`) ending in `.md.j2`, sorted by name
pub fn find_templates(root: &Path, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut templates = Vec::new();

    for entry in fs::read_dir(root.join(dir))? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if file_name.ends_with(TEMPLATE_SUFFIX) && entry.path().is_file() {
            templates.push(dir.join(file_name));
        }
    }

    templates.sort();
    Ok(templates)
}

/// Output file for a template: its file name without the `.j2` suffix
pub fn output_name(template: &Path) -> Option<PathBuf> {
    let file_name = template.file_name()?.to_str()?;
    file_name.strip_suffix(".j2").map(PathBuf::from)
}

/// Render every documentation template into `root`, returning the files written
pub fn render_docs(root: &Path, config: &DocsConfig) -> Result<Vec<PathBuf>> {
    let runner = CommandRunner::in_dir(root);
    let name = project_name(&runner, &config.name_command)?;

    let mut vars = Vars::new();
    vars.insert("name".to_string(), name);

    let renderer = TemplateRenderer::new(root)?;
    let mut written = Vec::new();
    for template in find_templates(root, &config.template_dir)? {
        let Some(output) = output_name(&template) else {
            continue;
        };
        renderer.render_file(&template, &vars, &output)?;
        written.push(output);
    }

    Ok(written)
}

/// Render `README.md.j2` in `root` into `README.md` without variables
pub fn render_readme(root: &Path) -> Result<PathBuf> {
    let renderer = TemplateRenderer::new(root)?;
    let output = PathBuf::from("README.md");
    renderer.render_file(Path::new(README_TEMPLATE), &Vars::new(), &output)?;
    Ok(output)
}
