//! Render a JSON module description to CSS.
//!
//! The input file carries a module's order class, settings, and a rule
//! list; each rule names a registered declaration function and supplies
//! its attribute tree:
//!
//! ```json
//! {
//!   "order_class": ".hero_button_0",
//!   "rules": [
//!     { "function": "force_fullwidth",
//!       "attr": { "desktop": { "value": "on" } } }
//!   ]
//! }
//! ```
//!
//! `--statements` prints the structured statement list as JSON instead of
//! flat CSS.

use anyhow::{bail, Context, Result};
use modcss_core::builder::{BuildSettings, ImportantPolicy, StyleBuilder, StyleRule};
use modcss_core::declaration::rules::IconPlacementSelector;
use modcss_core::declaration::{create_default_registry, DeclarationRegistry};
use modcss_core::{AttrTree, Breakpoint, BreakpointOrder, ResolveMode, SelectorFn};
use serde::Deserialize;
use std::fs;
use std::process::ExitCode;

#[derive(Debug, Deserialize)]
struct ModuleInput {
    order_class: String,
    #[serde(default)]
    base_selector: Option<String>,
    #[serde(default)]
    important: Option<serde_json::Value>,
    #[serde(default)]
    disabled_on: Vec<String>,
    rules: Vec<RuleInput>,
}

#[derive(Debug, Deserialize)]
struct RuleInput {
    function: String,
    attr: serde_json::Value,
    #[serde(default)]
    sub_key: Option<String>,
    #[serde(default)]
    selector: Option<String>,
    #[serde(default)]
    selector_function: Option<String>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    visit_all: bool,
}

fn parse_mode(raw: &str) -> Result<ResolveMode> {
    match raw {
        "exact" => Ok(ResolveMode::Exact),
        "inherit" => Ok(ResolveMode::Inherit),
        "inherit_all" => Ok(ResolveMode::InheritAll),
        other => bail!("unknown resolve mode '{other}'"),
    }
}

fn parse_important(raw: &serde_json::Value) -> Result<ImportantPolicy> {
    match raw {
        serde_json::Value::String(s) if s == "all" => Ok(ImportantPolicy::All),
        serde_json::Value::String(s) if s == "off" => Ok(ImportantPolicy::Off),
        serde_json::Value::Array(items) => {
            let properties = items
                .iter()
                .map(|v| {
                    v.as_str()
                        .map(str::to_string)
                        .context("important property list must hold strings")
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ImportantPolicy::PerProperty(properties))
        }
        other => bail!("unsupported important policy: {other}"),
    }
}

fn selector_strategy(spec: &str) -> Result<Box<dyn SelectorFn>> {
    match spec.split_once(':') {
        None if spec == "icon_placement" => Ok(Box::new(IconPlacementSelector::default())),
        Some(("icon_placement", path)) => Ok(Box::new(IconPlacementSelector::at(path))),
        _ => bail!("unknown selector function '{spec}'"),
    }
}

fn render(input: &str, registry: &DeclarationRegistry, as_statements: bool) -> Result<String> {
    let module: ModuleInput = serde_json::from_str(input).context("invalid module JSON")?;

    let trees = module
        .rules
        .iter()
        .map(|r| AttrTree::from_json(&r.attr))
        .collect::<modcss_core::Result<Vec<_>>>()
        .context("invalid attribute tree")?;

    let strategies = module
        .rules
        .iter()
        .map(|r| r.selector_function.as_deref().map(selector_strategy).transpose())
        .collect::<Result<Vec<_>>>()?;

    let mut rules = Vec::with_capacity(module.rules.len());
    for ((spec, tree), strategy) in module.rules.iter().zip(&trees).zip(&strategies) {
        let function = registry
            .get(&spec.function)
            .with_context(|| format!("unknown declaration function '{}'", spec.function))?;

        let mut rule = StyleRule::new(tree, function);
        if let Some(sub_key) = &spec.sub_key {
            rule = rule.with_sub_key(sub_key.as_str());
        }
        if let Some(selector) = &spec.selector {
            rule = rule.with_selector(selector.as_str());
        }
        if let Some(strategy) = strategy {
            rule = rule.with_selector_fn(strategy.as_ref());
        }
        if let Some(mode) = &spec.mode {
            rule = rule.with_mode(parse_mode(mode)?);
        }
        if spec.visit_all {
            rule = rule.visit_all();
        }
        rules.push(rule);
    }

    let mut settings = BuildSettings::new(module.order_class.as_str());
    if let Some(base) = &module.base_selector {
        settings = settings.with_base_selector(base.as_str());
    }
    if let Some(important) = &module.important {
        settings = settings.with_important(parse_important(important)?);
    }
    if !module.disabled_on.is_empty() {
        settings = settings.with_disabled_on(
            module
                .disabled_on
                .iter()
                .map(|name| Breakpoint::from_name(name))
                .collect(),
        );
    }

    let order = BreakpointOrder::default();
    let builder = StyleBuilder::new(&order, settings);
    let statements = builder.build(&rules);

    if as_statements {
        serde_json::to_string_pretty(&statements).context("serializing statements")
    } else {
        Ok(modcss_core::render_statements(&statements))
    }
}

fn run() -> Result<()> {
    let mut path = None;
    let mut as_statements = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--statements" => as_statements = true,
            other if path.is_none() => path = Some(other.to_string()),
            other => bail!("unexpected argument '{other}'"),
        }
    }
    let path = path.context("usage: modcss <module.json> [--statements]")?;
    let input = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let registry = create_default_registry();
    let output = render(&input, &registry, as_statements)?;
    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("modcss: {err:#}");
            ExitCode::FAILURE
        }
    }
}
