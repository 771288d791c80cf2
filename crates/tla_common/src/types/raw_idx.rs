oxc_index::define_index_type! {
  #[derive(Default)]
  pub struct RawIdx = u32;
}

pub type ModuleIdx = RawIdx;
