pub mod montlimart;
