//! # Interactive Menu
//!
//! The read-eval-print loop over a [`Stall`].
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  ┌──► menu ──► option? ──► prompts ──► command ──► print result ──┐     │
//! │  │                │                        │                      │     │
//! │  │                │                        └─ CliError ──► "Error: …"   │
//! │  │                │                                               │     │
//! │  └────────────────┼───────────────────────────────────────────────┘     │
//! │                   │                                                     │
//! │                   ├── 9 ──► expenses ──► closing report ──► Closed      │
//! │                   └── EOF (anywhere) ───────────────────► EndOfInput    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::commands::{closing, customer, recipe, sale, stock};
use crate::config::AppConfig;
use crate::error::{CliResult, ErrorCode};
use crate::prompt::Prompter;
use lanchonete_core::{ClosingReport, Expense, Ingredient, Money, NewSale, Stall};

const MENU: &str = "\
Choose an option:
1. Register/update stock item
2. Register recipe
3. Register customer
4. Record sale
5. Show stock
6. Show how many units a recipe can produce
7. Show sales history
8. Preview closing
9. Close register and exit";

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEnd {
    /// The register was closed with this report.
    Closed(ClosingReport),
    /// Input ran out before the register was closed.
    EndOfInput,
}

pub struct Session<R, W> {
    stall: Stall,
    config: AppConfig,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(stall: Stall, config: AppConfig, input: R, output: W) -> Self {
        Session {
            stall,
            config,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn stall(&self) -> &Stall {
        &self.stall
    }

    pub fn output(&self) -> &W {
        self.prompt.output()
    }

    pub fn into_parts(self) -> (Stall, W) {
        (self.stall, self.prompt.into_output())
    }

    /// Runs until the register is closed or input ends.
    ///
    /// Only terminal I/O failures escape; everything else is shown and the
    /// menu comes back.
    pub fn run(&mut self) -> CliResult<SessionEnd> {
        let banner = format!("\n=== {} ===", self.config.store_name);
        self.prompt.say(&banner)?;

        loop {
            self.prompt.say("")?;
            self.prompt.say(MENU)?;
            let Some(choice) = self.prompt.line("Option: ")? else {
                info!("input closed, ending session without closing");
                return Ok(SessionEnd::EndOfInput);
            };
            debug!(choice = %choice, "menu option");

            let outcome = match choice.as_str() {
                "1" => self.register_stock(),
                "2" => self.register_recipe(),
                "3" => self.register_customer(),
                "4" => self.record_sale(),
                "5" => self.show_stock(),
                "6" => self.show_producible(),
                "7" => self.show_history(),
                "8" => self.preview_closing(),
                "9" => match self.close_register() {
                    Ok(report) => return Ok(SessionEnd::Closed(report)),
                    Err(err) => Err(err),
                },
                _ => {
                    self.prompt.say("Invalid option, try again.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => {
                    self.prompt.say(&format!("Error: {}", err.message))?;
                }
                Err(err) if err.code == ErrorCode::EndOfInput => {
                    info!("input closed mid-command, ending session without closing");
                    return Ok(SessionEnd::EndOfInput);
                }
                Err(err) => return Err(err),
            }
        }
    }

    // =========================================================================
    // Options
    // =========================================================================

    fn register_stock(&mut self) -> CliResult<()> {
        let name = self.prompt.ask("Item name: ")?;
        let quantity = self.prompt.decimal("Quantity on hand: ")?;
        let unit = self.prompt.ask("Unit (g, un, ml...): ")?;
        let unit_cost = self.prompt.money("Unit cost: ")?;

        let line = stock::register_stock(
            &mut self.stall,
            stock::RegisterStock {
                name,
                quantity,
                unit,
                unit_cost,
            },
        )?;
        let text = format!(
            "Item {} set to {} {} at {} per {}.",
            line.name,
            line.quantity,
            line.unit,
            self.money(line.unit_cost),
            line.unit
        );
        self.prompt.say(&text)
    }

    fn register_recipe(&mut self) -> CliResult<()> {
        let name = self.prompt.ask("Recipe name: ")?;
        self.prompt.say("Enter ingredients (blank name to finish):")?;

        let mut ingredients = Vec::new();
        loop {
            let ingredient = self.prompt.ask("Ingredient: ")?;
            if ingredient.is_empty() {
                break;
            }
            let per_unit = self.prompt.decimal("Quantity per unit: ")?;
            ingredients.push(Ingredient::new(ingredient, per_unit));
        }

        let summary = recipe::register_recipe(&mut self.stall, &name, ingredients)?;
        let mut text = format!(
            "Recipe {} registered with {} ingredient(s).",
            summary.name, summary.ingredient_count
        );
        if let Some(cost) = summary.unit_cost {
            text.push_str(&format!(" Unit cost at current prices: {}.", self.money(cost)));
        }
        self.prompt.say(&text)
    }

    fn register_customer(&mut self) -> CliResult<()> {
        let name = self.prompt.ask("Customer name: ")?;
        let contact = self.prompt.ask("Contact (optional): ")?;

        let customer = customer::register_customer(&mut self.stall, &name, &contact)?;
        self.prompt
            .say(&format!("Customer {} registered.", customer.name))
    }

    fn record_sale(&mut self) -> CliResult<()> {
        let recipe_name = self.prompt.ask("Recipe sold: ")?;
        let quantity = self.prompt.count("Quantity sold: ")?;
        let unit_price = self.prompt.money("Unit price: ")?;
        let customer = self.prompt.ask("Customer (optional): ")?;

        let mut new_sale = NewSale::new(recipe_name, quantity, unit_price);
        if !customer.is_empty() {
            new_sale = new_sale.for_customer(customer);
        }

        let receipt = sale::record_sale(&mut self.stall, new_sale)?;
        let text = format!(
            "Sale #{} recorded: {} x {} = {}.",
            receipt.sequence,
            receipt.quantity,
            receipt.recipe,
            self.money(receipt.revenue)
        );
        self.prompt.say(&text)
    }

    fn show_stock(&mut self) -> CliResult<()> {
        let report = stock::stock_report(&self.stall, self.config.low_stock_threshold);
        if report.lines.is_empty() {
            return self.prompt.say("No stock registered.");
        }

        let mut text = String::from("Current stock:");
        for line in &report.lines {
            text.push_str(&format!(
                "\n- {}: {} {} (unit cost {}, value {}){}",
                line.name,
                line.quantity,
                line.unit,
                self.money(line.unit_cost),
                self.money(line.value),
                if line.low { " [LOW]" } else { "" }
            ));
        }
        text.push_str(&format!(
            "\nTotal stock value: {}",
            self.money(report.total_value)
        ));
        self.prompt.say(&text)
    }

    fn show_producible(&mut self) -> CliResult<()> {
        let recipe_name = self.prompt.ask("Recipe: ")?;
        let estimate = recipe::producible(&self.stall, &recipe_name)?;

        let mut text = format!(
            "With current stock you can produce {} unit(s) of {}.",
            estimate.max_units, estimate.recipe
        );
        if !estimate.bottlenecks.is_empty() {
            text.push_str(&format!(" Limited by: {}.", estimate.bottlenecks.join(", ")));
        }
        self.prompt.say(&text)
    }

    fn show_history(&mut self) -> CliResult<()> {
        let receipts = sale::history(&self.stall);
        if receipts.is_empty() {
            return self.prompt.say("No sales yet.");
        }

        let mut text = String::from("Sales history:");
        for r in &receipts {
            text.push_str(&format!(
                "\n#{} {} {} x {} @ {} = {}",
                r.sequence,
                r.time,
                r.quantity,
                r.recipe,
                self.money(r.unit_price),
                self.money(r.revenue)
            ));
            if let Some(customer) = &r.customer {
                text.push_str(&format!(" ({customer})"));
            }
        }
        self.prompt.say(&text)
    }

    fn preview_closing(&mut self) -> CliResult<()> {
        let report = closing::preview(&self.stall)?;
        let text = self.render_report("Closing Preview", &report);
        self.prompt.say(&text)
    }

    fn close_register(&mut self) -> CliResult<ClosingReport> {
        self.prompt
            .say("Enter the period's expenses (blank description to finish):")?;

        let mut expenses = Vec::new();
        loop {
            let description = self.prompt.ask("Expense description: ")?;
            if description.is_empty() {
                break;
            }
            let amount = self.prompt.money("Amount: ")?;
            expenses.push(Expense::new(description, amount));
        }

        let report = closing::close_register(&self.stall, &expenses)?;
        let text = self.render_report("Cash Closing", &report);
        self.prompt.say(&text)?;
        Ok(report)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    fn money(&self, amount: Money) -> String {
        self.config.format_currency(amount)
    }

    fn render_report(&self, title: &str, report: &ClosingReport) -> String {
        let mut text = format!(
            "\n=== {title} ===\nSales: {} ({} unit(s))",
            report.sale_count, report.units_sold
        );
        for line in &report.lines {
            text.push_str(&format!(
                "\n  {}: {} unit(s), revenue {}, cost {}",
                line.recipe,
                line.units,
                self.money(line.revenue),
                self.money(line.ingredient_cost)
            ));
        }
        text.push_str(&format!(
            "\nTotal revenue: {}\nIngredient cost: {}\nGross profit: {}\nExpenses: {}\nNet profit: {}",
            self.money(report.total_revenue),
            self.money(report.total_ingredient_cost),
            self.money(report.gross_profit),
            self.money(report.total_expenses),
            self.money(report.net_profit)
        ));
        text
    }
}
