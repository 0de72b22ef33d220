//! JSON Schema AST CLI
//!
//! Command-line interface for inspecting and normalizing draft-04 schema
//! documents.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jsonschema_ast::{
    encode_schema, encode_schema_value, load_schema_file, Items, Schema, TypeSet,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "jsonschema-ast")]
#[command(about = "Inspect and normalize JSON Schema draft-04 documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a schema and print a human-readable summary
    Inspect {
        /// Schema file to inspect
        schema: PathBuf,
    },

    /// Decode a schema and re-emit it in canonical form
    Normalize {
        /// Schema file to normalize
        schema: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check that a schema document decodes cleanly
    Check {
        /// Schema file to check
        schema: PathBuf,

        /// Output result as JSON (for automation)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { schema } => run_inspect(&schema),
        Commands::Normalize {
            schema,
            output,
            pretty,
        } => run_normalize(&schema, output, pretty),
        Commands::Check { schema, json } => run_check(&schema, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_inspect(path: &Path) -> Result<(), u8> {
    let schema = load_schema_file(path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    print_summary(&schema);
    Ok(())
}

fn print_summary(schema: &Schema) {
    if let Some(id) = &schema.id {
        println!("id:          {}", id);
    }
    if let Some(title) = &schema.title {
        println!("title:       {}", title);
    }
    if let Some(description) = &schema.description {
        println!("description: {}", description);
    }
    if let Some(dialect) = &schema.dialect {
        println!("$schema:     {}", dialect);
    }
    if let Some(reference) = &schema.reference {
        println!("$ref:        {}", reference);
    }
    if let Some(set) = &schema.r#type {
        match set {
            TypeSet::One(t) => println!("type:        {}", t),
            TypeSet::Many(types) => {
                let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
                println!("type:        [{}]", names.join(", "));
            }
        }
    }
    if let Some(required) = &schema.required {
        println!("required:    {}", required.join(", "));
    }
    if let Some(properties) = &schema.properties {
        println!("properties:  {} entries", properties.len());
        for name in properties.keys() {
            println!("  - {}", name);
        }
    }
    if let Some(definitions) = &schema.definitions {
        println!("definitions: {} entries", definitions.len());
    }
    if let Some(items) = &schema.items {
        match items {
            Items::Single(_) => println!("items:       single schema"),
            Items::Tuple(schemas) => println!("items:       tuple of {}", schemas.len()),
        }
    }
}

fn run_normalize(path: &Path, output: Option<PathBuf>, pretty: bool) -> Result<(), u8> {
    let schema = load_schema_file(path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let json_output = if pretty {
        let value = encode_schema_value(&schema).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;
        serde_json::to_string_pretty(&value).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?
    } else {
        let bytes = encode_schema(&schema).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;
        String::from_utf8(bytes).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

/// JSON report for `check --json`.
#[derive(Serialize)]
struct CheckReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

fn run_check(path: &Path, json_output: bool) -> Result<(), u8> {
    match load_schema_file(path) {
        Ok(_) => {
            if json_output {
                let report = CheckReport {
                    valid: true,
                    error: None,
                    path: None,
                };
                println!("{}", serde_json::to_string(&report).unwrap());
            } else {
                println!("Valid");
            }
            Ok(())
        }
        Err(e) => {
            if json_output {
                let field_path = match &e {
                    jsonschema_ast::LoadError::Decode(d) => d.path().map(str::to_string),
                    _ => None,
                };
                let report = CheckReport {
                    valid: false,
                    error: Some(e.to_string()),
                    path: field_path,
                };
                println!("{}", serde_json::to_string(&report).unwrap());
            } else {
                eprintln!("Error: {}", e);
            }
            Err(e.exit_code() as u8)
        }
    }
}
