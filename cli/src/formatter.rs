use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use proofer::{Arity, Command, FactListing, Formula, Mode, NumberedFact, Reply, Rule, RuleKind};

pub const WELCOME: &str = "Welcome to Proofer - The Logic Engine!";
pub const PROMPT: &str = "proofer> ";
pub const GOODBYE: &str = "Good bye!";

const ENTER_PREMISES: &str = "Enter some premises";
const ENTER_CONCLUSION: &str = "Enter the conclusion";
const ENTER_RULES: &str = "Entering rule mode";
const PROVEN: &str = "You've shown the conclusion to be true!";
const NOT_PROVEN: &str =
    "It appears you still haven't shown the conclusion to be true.  Are you sure the argument is valid?";
const RESETTING: &str = "Clearing facts, entering premise mode.";
const ASK_ADDEND: &str = "enter the statement to add:";

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Banner shown when the REPL starts
    pub fn format_welcome(&self) -> String {
        format!("{}\n{}\n", WELCOME, ENTER_PREMISES)
    }

    pub fn format_verdict(&self, proven: bool) -> &'static str {
        if proven {
            PROVEN
        } else {
            NOT_PROVEN
        }
    }

    /// Text for one reply, ending in a newline unless empty
    pub fn format_reply(&self, reply: &Reply) -> String {
        match reply {
            Reply::Nothing => String::new(),
            Reply::PremiseAdded { index, formula } => format!("{}. {}\n", index, formula),
            Reply::PremiseDuplicate { formula } => {
                format!("{} is already a known fact\n", formula)
            }
            Reply::ConclusionSet { conclusion } => {
                format!("Conclusion: {}\n{}\n", conclusion, ENTER_RULES)
            }
            Reply::Derived {
                rule,
                added,
                duplicates,
            } => self.format_derived(*rule, added, duplicates),
            Reply::AddendRequested => format!("{}\n", ASK_ADDEND),
            Reply::Facts(listing) => self.format_facts(listing),
            Reply::Done { proven } => format!("{}\n", self.format_verdict(*proven)),
            Reply::ConclusionMode => format!("{}\n", ENTER_CONCLUSION),
            Reply::Reset => format!("{}\n{}\n", RESETTING, ENTER_PREMISES),
            Reply::Help {
                mode,
                commands,
                rules,
            } => self.format_help(*mode, commands, rules),
            Reply::Exit => format!("{}\n", GOODBYE),
        }
    }

    fn format_derived(&self, rule: Rule, added: &[NumberedFact], duplicates: &[Formula]) -> String {
        let mut output = String::new();
        for fact in added {
            output.push_str(&format!("{}. {}    {}\n", fact.index, fact.formula, rule));
        }
        match duplicates.len() {
            0 => {}
            1 => output.push_str(&format!("{} is already a known fact\n", duplicates[0])),
            n => output.push_str(&format!("{} results were already known facts\n", n)),
        }
        if output.is_empty() {
            output.push_str(&format!("{} derived nothing\n", rule));
        }
        output
    }

    pub fn format_facts(&self, listing: &FactListing) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Fact").set_alignment(CellAlignment::Left),
        ]));

        for fact in &listing.facts {
            table.add_row(Row::from(vec![
                Cell::new(fact.index).set_alignment(CellAlignment::Right),
                Cell::new(&fact.formula),
            ]));
        }

        let mut output = table.to_string();
        output.push('\n');
        if let Some(conclusion) = &listing.conclusion {
            output.push_str(&format!("Conclusion: {}\n", conclusion));
        }
        output
    }

    pub fn format_rules(&self, rules: &[Rule]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Rule").set_alignment(CellAlignment::Left),
            Cell::new("Name").set_alignment(CellAlignment::Left),
            Cell::new("Kind").set_alignment(CellAlignment::Left),
            Cell::new("Usage").set_alignment(CellAlignment::Left),
        ]));

        for rule in rules {
            let kind = match rule.kind() {
                RuleKind::Inference => "inference",
                RuleKind::Replacement => "replacement",
            };
            let usage = if !rule.is_supported() {
                "not implemented".to_string()
            } else {
                match (rule.kind(), rule.arity()) {
                    (RuleKind::Replacement, _) => format!("{}(n[,coordinate])", rule),
                    (RuleKind::Inference, Arity::Unary) => format!("{}(n)", rule),
                    (RuleKind::Inference, Arity::Binary) => format!("{}(n,m)", rule),
                }
            };
            table.add_row(Row::from(vec![rule.terse(), rule.verbose(), kind, usage.as_str()]));
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }

    fn format_help(&self, mode: Mode, commands: &[Command], rules: &[Rule]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new(format!("Commands in {} mode", mode)).set_alignment(CellAlignment::Left),
            Cell::new(""),
        ]));
        for command in commands {
            table.add_row(Row::from(vec![command.keyword(), command.description()]));
        }

        let mut output = table.to_string();
        output.push('\n');
        if mode == Mode::Rule {
            output.push_str("Rules are entered as name(arg0[,arg1]); * stands for every fact\n");
            output.push_str(&self.format_rules(rules));
        }
        output
    }
}
