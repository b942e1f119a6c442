// src/model/elements.rs

/// Reference data for one chemical element.
///
/// `period` and `group` follow the standard 18-column layout. Lanthanides
/// (La..Lu) and actinides (Ac..Lr) are all reported in group 3, which is where
/// the grid mapper picks them out and moves them into their own strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRecord {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u8,
    pub period: u8,
    pub group: u8,
}

pub const ELEMENT_COUNT: usize = 118;

const fn el(symbol: &'static str, name: &'static str, atomic_number: u8, period: u8, group: u8) -> ElementRecord {
    ElementRecord { symbol, name, atomic_number, period, group }
}

/// Indexed by atomic number - 1.
pub static ELEMENTS: [ElementRecord; ELEMENT_COUNT] = [
    // --- Period 1 ---
    el("H", "Hydrogen", 1, 1, 1),
    el("He", "Helium", 2, 1, 18),
    // --- Period 2 ---
    el("Li", "Lithium", 3, 2, 1),
    el("Be", "Beryllium", 4, 2, 2),
    el("B", "Boron", 5, 2, 13),
    el("C", "Carbon", 6, 2, 14),
    el("N", "Nitrogen", 7, 2, 15),
    el("O", "Oxygen", 8, 2, 16),
    el("F", "Fluorine", 9, 2, 17),
    el("Ne", "Neon", 10, 2, 18),
    // --- Period 3 ---
    el("Na", "Sodium", 11, 3, 1),
    el("Mg", "Magnesium", 12, 3, 2),
    el("Al", "Aluminium", 13, 3, 13),
    el("Si", "Silicon", 14, 3, 14),
    el("P", "Phosphorus", 15, 3, 15),
    el("S", "Sulfur", 16, 3, 16),
    el("Cl", "Chlorine", 17, 3, 17),
    el("Ar", "Argon", 18, 3, 18),
    // --- Period 4 ---
    el("K", "Potassium", 19, 4, 1),
    el("Ca", "Calcium", 20, 4, 2),
    el("Sc", "Scandium", 21, 4, 3),
    el("Ti", "Titanium", 22, 4, 4),
    el("V", "Vanadium", 23, 4, 5),
    el("Cr", "Chromium", 24, 4, 6),
    el("Mn", "Manganese", 25, 4, 7),
    el("Fe", "Iron", 26, 4, 8),
    el("Co", "Cobalt", 27, 4, 9),
    el("Ni", "Nickel", 28, 4, 10),
    el("Cu", "Copper", 29, 4, 11),
    el("Zn", "Zinc", 30, 4, 12),
    el("Ga", "Gallium", 31, 4, 13),
    el("Ge", "Germanium", 32, 4, 14),
    el("As", "Arsenic", 33, 4, 15),
    el("Se", "Selenium", 34, 4, 16),
    el("Br", "Bromine", 35, 4, 17),
    el("Kr", "Krypton", 36, 4, 18),
    // --- Period 5 ---
    el("Rb", "Rubidium", 37, 5, 1),
    el("Sr", "Strontium", 38, 5, 2),
    el("Y", "Yttrium", 39, 5, 3),
    el("Zr", "Zirconium", 40, 5, 4),
    el("Nb", "Niobium", 41, 5, 5),
    el("Mo", "Molybdenum", 42, 5, 6),
    el("Tc", "Technetium", 43, 5, 7),
    el("Ru", "Ruthenium", 44, 5, 8),
    el("Rh", "Rhodium", 45, 5, 9),
    el("Pd", "Palladium", 46, 5, 10),
    el("Ag", "Silver", 47, 5, 11),
    el("Cd", "Cadmium", 48, 5, 12),
    el("In", "Indium", 49, 5, 13),
    el("Sn", "Tin", 50, 5, 14),
    el("Sb", "Antimony", 51, 5, 15),
    el("Te", "Tellurium", 52, 5, 16),
    el("I", "Iodine", 53, 5, 17),
    el("Xe", "Xenon", 54, 5, 18),
    // --- Period 6 ---
    el("Cs", "Caesium", 55, 6, 1),
    el("Ba", "Barium", 56, 6, 2),
    el("La", "Lanthanum", 57, 6, 3),
    el("Ce", "Cerium", 58, 6, 3),
    el("Pr", "Praseodymium", 59, 6, 3),
    el("Nd", "Neodymium", 60, 6, 3),
    el("Pm", "Promethium", 61, 6, 3),
    el("Sm", "Samarium", 62, 6, 3),
    el("Eu", "Europium", 63, 6, 3),
    el("Gd", "Gadolinium", 64, 6, 3),
    el("Tb", "Terbium", 65, 6, 3),
    el("Dy", "Dysprosium", 66, 6, 3),
    el("Ho", "Holmium", 67, 6, 3),
    el("Er", "Erbium", 68, 6, 3),
    el("Tm", "Thulium", 69, 6, 3),
    el("Yb", "Ytterbium", 70, 6, 3),
    el("Lu", "Lutetium", 71, 6, 3),
    el("Hf", "Hafnium", 72, 6, 4),
    el("Ta", "Tantalum", 73, 6, 5),
    el("W", "Tungsten", 74, 6, 6),
    el("Re", "Rhenium", 75, 6, 7),
    el("Os", "Osmium", 76, 6, 8),
    el("Ir", "Iridium", 77, 6, 9),
    el("Pt", "Platinum", 78, 6, 10),
    el("Au", "Gold", 79, 6, 11),
    el("Hg", "Mercury", 80, 6, 12),
    el("Tl", "Thallium", 81, 6, 13),
    el("Pb", "Lead", 82, 6, 14),
    el("Bi", "Bismuth", 83, 6, 15),
    el("Po", "Polonium", 84, 6, 16),
    el("At", "Astatine", 85, 6, 17),
    el("Rn", "Radon", 86, 6, 18),
    // --- Period 7 ---
    el("Fr", "Francium", 87, 7, 1),
    el("Ra", "Radium", 88, 7, 2),
    el("Ac", "Actinium", 89, 7, 3),
    el("Th", "Thorium", 90, 7, 3),
    el("Pa", "Protactinium", 91, 7, 3),
    el("U", "Uranium", 92, 7, 3),
    el("Np", "Neptunium", 93, 7, 3),
    el("Pu", "Plutonium", 94, 7, 3),
    el("Am", "Americium", 95, 7, 3),
    el("Cm", "Curium", 96, 7, 3),
    el("Bk", "Berkelium", 97, 7, 3),
    el("Cf", "Californium", 98, 7, 3),
    el("Es", "Einsteinium", 99, 7, 3),
    el("Fm", "Fermium", 100, 7, 3),
    el("Md", "Mendelevium", 101, 7, 3),
    el("No", "Nobelium", 102, 7, 3),
    el("Lr", "Lawrencium", 103, 7, 3),
    el("Rf", "Rutherfordium", 104, 7, 4),
    el("Db", "Dubnium", 105, 7, 5),
    el("Sg", "Seaborgium", 106, 7, 6),
    el("Bh", "Bohrium", 107, 7, 7),
    el("Hs", "Hassium", 108, 7, 8),
    el("Mt", "Meitnerium", 109, 7, 9),
    el("Ds", "Darmstadtium", 110, 7, 10),
    el("Rg", "Roentgenium", 111, 7, 11),
    el("Cn", "Copernicium", 112, 7, 12),
    el("Nh", "Nihonium", 113, 7, 13),
    el("Fl", "Flerovium", 114, 7, 14),
    el("Mc", "Moscovium", 115, 7, 15),
    el("Lv", "Livermorium", 116, 7, 16),
    el("Ts", "Tennessine", 117, 7, 17),
    el("Og", "Oganesson", 118, 7, 18),
];

/// All known elements in atomic-number order.
pub fn all() -> &'static [ElementRecord] {
    &ELEMENTS
}

/// Case-sensitive symbol lookup ("Fe", not "FE").
pub fn by_symbol(symbol: &str) -> Option<&'static ElementRecord> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

pub fn by_number(z: u8) -> Option<&'static ElementRecord> {
    if z == 0 {
        return None;
    }
    ELEMENTS.get(usize::from(z) - 1)
}
