pub mod treap;
