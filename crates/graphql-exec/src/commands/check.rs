use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::demo_schema;
use crate::output_utils;
use libgraphql_exec::operation::parse;
use libgraphql_exec::schema::Schema;
use libgraphql_exec::validation::validate;
use libgraphql_exec::value::Variables;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for query \
             documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    query_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more query documents or directories containing \
             query documents which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CheckCmd {
    /// Every file under the given paths whose extension is one of
    /// `query_file_exts`. A single file path given on its own is always
    /// checked, whatever its extension.
    fn collect_files(&self) -> (Vec<PathBuf>, Vec<String>) {
        let exts: HashSet<&str> = self.query_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

        let mut errors = vec![];
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        let matches = entry.path().extension()
                            .is_some_and(|ext| exts.contains(ext.to_string_lossy().as_ref()));
                        if matches {
                            file_paths.push(entry.into_path());
                        } else {
                            log::trace!("Skipping {:#?}.", entry.path());
                        }
                    },
                    Ok(_) => (),
                    Err(err) => errors.push(format!("{path:#?}: {err}")),
                }
            }
        }

        if file_paths.is_empty()
            && let [single] = self.file_or_dir_paths.as_slice()
            && single.is_file() {
            log::warn!("Checking {single:#?} even though its extension is not a query file extension.");
            file_paths.push(single.clone());
        }
        (file_paths, errors)
    }
}

fn check_file(schema: &Schema, path: &Path) -> Result<(), String> {
    let source = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    let query = parse(&source, &Variables::new()).map_err(|err| err.to_string())?;
    let root = schema.root_type(query.kind());
    validate(schema, root, query.selection_set()).map_err(|err| {
        let path = err.path().iter()
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>()
            .join(".");
        if path.is_empty() {
            err.to_string()
        } else {
            format!("{path}: {err}")
        }
    })
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub fn label(&self) -> String {
        let paths: Vec<String> = self.file_or_dir_paths.iter()
            .map(|path| path.display().to_string())
            .collect();
        format!("check {}", paths.join(" "))
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match demo_schema::build() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::failure(format_args!(
                "{} Failed to build the demo schema: {err}",
                output_utils::RED_X,
            )),
        };

        let (file_paths, mut errors) = self.collect_files();
        log::debug!("Found {} query documents to check.", file_paths.len());

        for path in &file_paths {
            if let Err(err) = check_file(&schema, path) {
                errors.push(format!("{}: {err}", path.display()));
            }
        }

        if errors.is_empty() {
            CommandResult::success(format_args!(
                "{} All {} query documents are valid.",
                output_utils::GREEN_CHECK,
                file_paths.len(),
            ))
        } else {
            CommandResult::failure(format_args!(
                "{} {} problems found:\n  * {}",
                output_utils::RED_X,
                errors.len(),
                errors.join("\n  * "),
            ))
        }
    }
}
