pub mod a001_products;
