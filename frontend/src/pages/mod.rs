pub mod cities;
pub mod city;
pub mod home;
pub mod not_found;
