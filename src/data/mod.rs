pub mod moves;
pub mod pokeapi;
pub mod species;
pub mod type_chart;
