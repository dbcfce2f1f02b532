use ndarray;
use std::fmt;

/// Probability of each `Genotype`, indexed by `Genotype::index()`.
pub type Probabilities = ndarray::Array1<f64>;

/// Number of genotype classes in the model.
pub const N_GENOTYPES: usize = 3;

/// `WEIGHTS[i][j]` is the distribution of a child's genotype when one parent
/// has genotype `i` and the other genotype `j`.
pub static WEIGHTS: [[[f64; N_GENOTYPES]; N_GENOTYPES]; N_GENOTYPES] = [
    [[1.0, 0.0, 0.0], [0.5, 0.5, 0.0], [0.0, 1.0, 0.0]],
    [[0.5, 0.5, 0.0], [0.25, 0.5, 0.25], [0.0, 0.5, 0.5]],
    [[0.0, 1.0, 0.0], [0.0, 0.5, 0.5], [0.0, 0.0, 1.0]],
];

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Genotype {
    /// AA
    HomozygousDominant,
    /// Aa
    Heterozygous,
    /// aa, the only genotype that shows the power
    HomozygousRecessive,
}

impl Genotype {
    pub const ALL: [Genotype; N_GENOTYPES] = [
        Genotype::HomozygousDominant,
        Genotype::Heterozygous,
        Genotype::HomozygousRecessive,
    ];

    pub fn index(self) -> usize {
        match self {
            Genotype::HomozygousDominant => 0,
            Genotype::Heterozygous => 1,
            Genotype::HomozygousRecessive => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Genotype::HomozygousDominant => "AA",
            Genotype::Heterozygous => "Aa",
            Genotype::HomozygousRecessive => "aa",
        }
    }

    /// Distribution that puts all the mass on this genotype.
    pub fn certain(self) -> Probabilities {
        let mut probs = Probabilities::zeros(N_GENOTYPES);
        probs[self.index()] = 1.0;
        probs
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prior for a member without known parents or power-carrying relatives.
///
/// There is no population frequency data, so AA and Aa are taken as equally
/// likely.
pub fn uninformed() -> Probabilities {
    ndarray::arr1(&[0.5, 0.5, 0.0])
}

/// Child genotype distribution for one pair of parent genotypes.
pub fn transmission(a: Genotype, b: Genotype) -> ndarray::ArrayView1<'static, f64> {
    ndarray::aview1(&WEIGHTS[a.index()][b.index()])
}
