use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, LitStr};

/// A wire-notation expression checked at compile time
enum Sop {
    Constant(bool),
    /// Terms of `(variable index, negated)` literals
    Sum(Vec<Vec<(u8, bool)>>),
}

impl Sop {
    /// Check `text` against the wire notation, reporting errors on `lit`
    fn check(lit: &LitStr) -> Result<Self> {
        let text = lit.value();
        match text.as_str() {
            "0" => return Ok(Sop::Constant(false)),
            "1" => return Ok(Sop::Constant(true)),
            "" => return Err(syn::Error::new(lit.span(), "empty expression")),
            _ => {}
        }

        let mut terms = Vec::new();
        for (index, term) in text.split('+').enumerate() {
            if term.is_empty() {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("term {} of {:?} is empty", index + 1, text),
                ));
            }
            terms.push(parse_term(term).map_err(|msg| syn::Error::new(lit.span(), msg))?);
        }
        Ok(Sop::Sum(terms))
    }

    /// Number of terms, or 0 for a constant
    fn num_terms(&self) -> usize {
        match self {
            Sop::Constant(_) => 0,
            Sop::Sum(terms) => terms.len(),
        }
    }
}

/// Parse one product term: letters, each optionally followed by `#`
fn parse_term(term: &str) -> std::result::Result<Vec<(u8, bool)>, String> {
    let mut literals: Vec<(u8, bool)> = Vec::new();
    for c in term.chars() {
        match c {
            'A'..='Z' => literals.push((c as u8 - b'A', false)),
            '#' => match literals.last_mut() {
                Some((_, negated)) if !*negated => *negated = true,
                Some(_) => return Err(format!("repeated '#' in term {:?}", term)),
                None => return Err(format!("'#' must follow a variable in term {:?}", term)),
            },
            _ => {
                return Err(format!(
                    "unexpected character {:?}; expected A-Z, '#' or '+'",
                    c
                ))
            }
        }
    }
    Ok(literals)
}

struct SopInput {
    lit: LitStr,
    sop: Sop,
}

impl Parse for SopInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit: LitStr = input.parse()?;
        let sop = Sop::check(&lit)?;
        Ok(SopInput { lit, sop })
    }
}

/// The `sop!` procedural macro for wire-notation expressions
///
/// Checks a string literal against the wire notation at compile time and
/// expands to the parsed `sop_logic::Expression`.
///
/// # Supported Syntax
///
/// - `"0"` and `"1"` - the constants
/// - `"AB#"` - a product term: letters `A`-`Z`, `#` after a letter negates it
/// - `"AB#+C"` - terms separated by `+`
///
/// Whitespace, lowercase letters, empty terms and a `#` without a variable
/// before it are rejected with a compile error.
///
/// # Examples
///
/// ```ignore
/// use sop_logic::sop;
///
/// let or = sop!("A+B");
/// let xor = sop!("A#B+AB#");
/// let never = sop!("0");
/// ```
#[proc_macro]
pub fn sop(input: TokenStream) -> TokenStream {
    let SopInput { lit, sop } = parse_macro_input!(input as SopInput);
    let message = format!(
        "sop! accepted {:?} ({} terms) but the parser rejected it",
        lit.value(),
        sop.num_terms()
    );
    let tokens = match sop {
        Sop::Constant(value) => quote! {
            ::sop_logic::Expression::Constant(#value)
        },
        Sop::Sum(_) => quote! {
            ::sop_logic::Expression::parse(#lit).expect(#message)
        },
    };
    TokenStream::from(tokens)
}
