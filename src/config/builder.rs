use crate::config::{merge::Merge, types::*};
use anyhow::{Result, anyhow};
use clap::ValueEnum;

pub const STRICT_ENV: &str = "ALTERSQL_STRICT";
pub const FORMAT_ENV: &str = "ALTERSQL_FORMAT";

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        self.resolve_with_env(|name| std::env::var(name).ok())
    }

    /// Resolve against an explicit environment lookup instead of the process environment.
    pub fn resolve_with_env<F>(self, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            render: self.resolve_render(&defaults.render, &env)?,
        })
    }

    fn resolve_render<F>(&self, defaults: &Render, env: &F) -> Result<Render>
    where
        F: Fn(&str) -> Option<String>,
    {
        let render_input = self.config_input.render.as_ref();

        let strict = match render_input.and_then(|r| r.strict) {
            Some(strict) => strict,
            None => match env(STRICT_ENV) {
                Some(value) => parse_bool(STRICT_ENV, &value)?,
                None => defaults.strict,
            },
        };

        let format = match render_input.and_then(|r| r.format) {
            Some(format) => format,
            None => match env(FORMAT_ENV) {
                Some(value) => OutputFormat::from_str(&value, true)
                    .map_err(|_| anyhow!("Invalid {} value: {}", FORMAT_ENV, value))?,
                None => defaults.format,
            },
        };

        Ok(Render { strict, format })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(anyhow!("Invalid {} value: {}", name, value)),
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
