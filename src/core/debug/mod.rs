//! Ferramentas de diagnóstico.

pub mod klog;
