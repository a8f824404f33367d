//! Packed monomial representation for moment matrix indexing.
//!
//! Monomials are represented as packed vectors of exponents with efficient
//! comparison, multiplication, and hashing. The [`Monomial`] trait is the
//! capability interface the extraction algorithms are written against.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum number of variables supported with packed representation.
pub const MAX_VARS: usize = 16;

/// A problem variable, identified by its position in the variable list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(pub usize);

impl Variable {
    /// Returns the position of this variable.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Capabilities required from a monomial by the extraction algorithms.
///
/// The moment matrix owns the monomials; the extractors only multiply them
/// by variables and look the products up in the row index.
pub trait Monomial: Clone + Eq + Ord + Hash + fmt::Debug + Send + Sync {
    /// The variable type this monomial can be multiplied by.
    type Var: Clone + Eq + Hash + fmt::Debug + Send + Sync;

    /// Returns `self * var`.
    #[must_use]
    fn mul_var(&self, var: &Self::Var) -> Self;

    /// Returns the total degree.
    fn total_degree(&self) -> u32;
}

/// A packed monomial with up to `MAX_VARS` variables.
///
/// Each exponent is stored as a u16, allowing exponents up to 65535.
/// The total degree is cached for efficient ordering comparisons.
#[derive(Clone, Copy)]
pub struct PackedMonomial {
    /// Exponents for each variable (x_0, x_1, ..., x_{n-1}).
    exponents: [u16; MAX_VARS],
    /// Number of active variables.
    num_vars: u8,
    /// Cached total degree.
    total_degree: u32,
}

impl PackedMonomial {
    /// Creates a new monomial with the given exponents.
    #[must_use]
    pub fn new(exps: &[u16]) -> Self {
        let mut exponents = [0u16; MAX_VARS];
        let n = exps.len().min(MAX_VARS);
        exponents[..n].copy_from_slice(&exps[..n]);

        let total_degree: u32 = exponents.iter().map(|&e| u32::from(e)).sum();

        Self {
            exponents,
            num_vars: n as u8,
            total_degree,
        }
    }

    /// Creates the identity monomial (1).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self {
            exponents: [0u16; MAX_VARS],
            num_vars: num_vars.min(MAX_VARS) as u8,
            total_degree: 0,
        }
    }

    /// Creates a monomial for a single variable: x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        let mut exponents = [0u16; MAX_VARS];
        if i < MAX_VARS {
            exponents[i] = 1;
        }
        Self {
            exponents,
            num_vars: num_vars.max(i + 1).min(MAX_VARS) as u8,
            total_degree: 1,
        }
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u16 {
        if i < MAX_VARS {
            self.exponents[i]
        } else {
            0
        }
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn exponents(&self) -> &[u16] {
        &self.exponents[..self.num_vars as usize]
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars as usize
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.total_degree
    }

    /// Checks if this is the identity monomial (1).
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.total_degree == 0
    }

    /// Multiplies two monomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut exponents = [0u16; MAX_VARS];
        let n = self.num_vars.max(other.num_vars) as usize;

        for i in 0..n {
            exponents[i] = self.exponents[i].saturating_add(other.exponents[i]);
        }

        Self {
            exponents,
            num_vars: n as u8,
            total_degree: self.total_degree + other.total_degree,
        }
    }

    /// Evaluates the monomial at a point.
    ///
    /// Coordinates missing from `point` are treated as zero.
    #[must_use]
    pub fn eval(&self, point: &[f64]) -> f64 {
        self.exponents()
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| point.get(i).copied().unwrap_or(0.0).powi(i32::from(e)))
            .product()
    }

    /// Compares using graded reverse lexicographic (grevlex) ordering.
    #[must_use]
    pub fn cmp_grevlex(&self, other: &Self) -> Ordering {
        match self.total_degree.cmp(&other.total_degree) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Last variable first, reversed
        let n = self.num_vars.max(other.num_vars) as usize;
        for i in (0..n).rev() {
            match other.exponents[i].cmp(&self.exponents[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }

    /// Compares using graded lexicographic ordering.
    #[must_use]
    pub fn cmp_grlex(&self, other: &Self) -> Ordering {
        self.total_degree
            .cmp(&other.total_degree)
            .then_with(|| self.cmp_lex(other))
    }

    /// Compares using pure lexicographic ordering.
    #[must_use]
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        let n = self.num_vars.max(other.num_vars) as usize;
        for i in 0..n {
            match self.exponents[i].cmp(&other.exponents[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl Monomial for PackedMonomial {
    type Var = Variable;

    fn mul_var(&self, var: &Variable) -> Self {
        self.mul(&Self::var(var.index(), self.num_vars()))
    }

    fn total_degree(&self) -> u32 {
        self.total_degree
    }
}

impl PartialEq for PackedMonomial {
    fn eq(&self, other: &Self) -> bool {
        if self.total_degree != other.total_degree {
            return false;
        }
        let n = self.num_vars.max(other.num_vars) as usize;
        self.exponents[..n] == other.exponents[..n]
    }
}

impl Eq for PackedMonomial {}

impl Hash for PackedMonomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Consistent with PartialEq: trailing zero exponents never contribute.
        self.total_degree.hash(state);

        let last_nonzero = self
            .exponents
            .iter()
            .rposition(|&e| e != 0)
            .map_or(0, |i| i + 1);
        self.exponents[..last_nonzero].hash(state);
    }
}

/// Monomials are totally ordered by grevlex.
impl Ord for PackedMonomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_grevlex(other)
    }
}

impl PartialOrd for PackedMonomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for PackedMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &e) in self.exponents().iter().enumerate() {
            if e > 0 {
                if !first {
                    write!(f, "*")?;
                }
                first = false;
                if e == 1 {
                    write!(f, "x{i}")?;
                } else {
                    write!(f, "x{i}^{e}")?;
                }
            }
        }
        if first {
            write!(f, "1")?;
        }
        Ok(())
    }
}

impl fmt::Display for PackedMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for PackedMonomial {
    fn default() -> Self {
        Self::one(0)
    }
}
