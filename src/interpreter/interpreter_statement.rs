//statement execution,
//each statement yields an optional text fragment,
//compound statements join what their children yield with newlines

use super::{Interpreter, RuntimeError, RuntimeResult, Value};
use crate::ast::Statement;
use tracing::trace;

impl<'i> Interpreter<'i> {
    pub fn execute(&mut self, stmt: &Statement) -> RuntimeResult<Option<String>> {
        match stmt {
            // The declared type is not enforced, both kinds start at numeric zero
            Statement::VariableDeclaration { name, value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Number(0.0),
                };
                self.variables.insert(name.clone(), value);
                Ok(None)
            }
            Statement::Assignment { name, value } => {
                if !self.variables.contains_key(name) {
                    return Err(RuntimeError::AssignToUndefined { name: name.clone() });
                }
                let value = self.evaluate(value)?;
                self.variables.insert(name.clone(), value);
                Ok(None)
            }
            Statement::Print { expression } => {
                let value = self.evaluate(expression)?;
                Ok(Some(value.to_string()))
            }
            Statement::IfStatement {
                condition,
                consequent,
                alternate,
            } => {
                let branch = if self.evaluate(condition)?.is_truthy() {
                    Some(consequent)
                } else {
                    alternate.as_ref()
                };
                let mut fragments = Vec::new();
                if let Some(statements) = branch {
                    self.execute_block(statements, &mut fragments)?;
                }
                Ok(join_fragments(fragments))
            }
            Statement::WhileLoop { condition, body } => {
                let mut fragments = Vec::new();
                while self.evaluate(condition)?.is_truthy() {
                    self.execute_block(body, &mut fragments)?;
                }
                Ok(join_fragments(fragments))
            }
            Statement::Read { variable } => {
                self.read_into(variable)?;
                Ok(None)
            }
        }
    }

    pub fn execute_block(&mut self, statements: &[Statement], fragments: &mut Vec<String>) -> RuntimeResult<()> {
        for stmt in statements {
            if let Some(fragment) = self.execute(stmt)? {
                fragments.push(fragment);
            }
        }
        Ok(())
    }

    fn read_into(&mut self, variable: &str) -> RuntimeResult<()> {
        if !self.variables.contains_key(variable) {
            return Err(RuntimeError::ReadIntoUndefined {
                name: variable.to_string(),
            });
        }
        let line = self
            .input
            .read_line(variable)?
            .ok_or_else(|| RuntimeError::InputExhausted {
                name: variable.to_string(),
            })?;
        let value = match line.trim().parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(line),
        };
        trace!(variable, %value, "read");
        self.variables.insert(variable.to_string(), value);
        Ok(())
    }
}

fn join_fragments(fragments: Vec<String>) -> Option<String> {
    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{Interpreter, RuntimeError, ScriptedInput, Value};
    use crate::lexer_tokenizer::tokenize;
    use crate::parser::Parser;

    fn run_with(source: &str, lines: &[&str]) -> Result<String, RuntimeError> {
        let tokens = tokenize(source).unwrap();
        let program = Parser::new(&tokens).parse_program().unwrap();
        let mut input = ScriptedInput::new(lines.iter().copied());
        Interpreter::new(&mut input).run(&program)
    }

    fn run(source: &str) -> Result<String, RuntimeError> {
        run_with(source, &[])
    }

    #[test]
    fn print_and_declare() {
        assert_eq!(run("main { nombre x = 5; afficher(x); }").unwrap(), "5.0");
        assert_eq!(run("main { crêpe y; afficher(y); }").unwrap(), "0.0");
    }

    #[test]
    fn uninitialized_declarations_start_at_zero() {
        assert_eq!(
            run("main { nombre a; crêpe b; afficher(a); afficher(b + 1); }").unwrap(),
            "0.0\n1.0"
        );
    }

    #[test]
    fn else_branch_runs_when_condition_false() {
        assert_eq!(
            run("main { macaron (1 > 2) { afficher(1); } autre { afficher(2); afficher(3); } }").unwrap(),
            "2.0\n3.0"
        );
    }

    #[test]
    fn skipped_if_contributes_no_line() {
        assert_eq!(
            run("main { afficher(1); macaron (0) { afficher(2); } afficher(3); }").unwrap(),
            "1.0\n3.0"
        );
    }

    #[test]
    fn nested_output_follows_execution_order() {
        let source = "main {
            nombre i = 0;
            tour_eiffel (i < 3) {
                afficher(i);
                macaron (i == 1) { afficher(\"un\"); }
                i = i + 1;
            }
            afficher(\"fin\");
        }";
        assert_eq!(run(source).unwrap(), "0.0\n1.0\nun\n2.0\nfin");
    }

    #[test]
    fn empty_text_still_yields_a_line() {
        assert_eq!(run("main { afficher(\"\"); afficher(1); }").unwrap(), "\n1.0");
    }

    #[test]
    fn comparison_prints_as_bool() {
        assert_eq!(run("main { afficher(2 >= 3); }").unwrap(), "False");
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(
            run("main { crêpe s = \"bon\"; s = s + \"jour\"; afficher(s); }").unwrap(),
            "bonjour"
        );
    }

    #[test]
    fn assignment_to_undeclared_fails() {
        assert!(matches!(
            run("main { x = 1; }"),
            Err(RuntimeError::AssignToUndefined { name }) if name == "x"
        ));
    }

    #[test]
    fn reading_undeclared_identifier_fails() {
        assert!(matches!(
            run("main { afficher(y); }"),
            Err(RuntimeError::UndefinedVariable { name }) if name == "y"
        ));
    }

    #[test]
    fn read_parses_number_or_keeps_text() {
        assert_eq!(
            run_with(
                "main { nombre a; crêpe b; lire(a); lire(b); afficher(a + 1); afficher(b); }",
                &["41", "bonjour"]
            )
            .unwrap(),
            "42.0\nbonjour"
        );
    }

    #[test]
    fn read_into_undeclared_fails_before_consuming_input() {
        let tokens = tokenize("main { lire(z); }").unwrap();
        let program = Parser::new(&tokens).parse_program().unwrap();
        let mut input = ScriptedInput::new(["1"]);
        let err = Interpreter::new(&mut input).run(&program).unwrap_err();
        assert!(matches!(err, RuntimeError::ReadIntoUndefined { .. }));
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn read_without_input_fails() {
        assert!(matches!(
            run("main { nombre a; lire(a); }"),
            Err(RuntimeError::InputExhausted { .. })
        ));
    }

    #[test]
    fn division_by_zero_aborts_run() {
        assert!(matches!(
            run("main { afficher(1); afficher(1 / 0); }"),
            Err(RuntimeError::DivisionByZero)
        ));
    }

    #[test]
    fn store_holds_final_values() {
        let tokens = tokenize("main { nombre x = 2; x = x * 21; }").unwrap();
        let program = Parser::new(&tokens).parse_program().unwrap();
        let mut input = ScriptedInput::default();
        let mut interpreter = Interpreter::new(&mut input);
        assert_eq!(interpreter.run(&program).unwrap(), "");
        assert_eq!(interpreter.variables.get("x"), Some(&Value::Number(42.0)));
    }
}
