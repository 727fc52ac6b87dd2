use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  pub(crate) fn with_default_stages(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(ElementLimitStage));
    pipeline.add_stage(Box::new(RemoveDisallowedNodesStage));
    pipeline.add_stage(Box::new(CollectCandidatesStage));

    pipeline.add_selection_stages();

    pipeline
  }

  /// Only the selection half: picks a top candidate from whatever candidates
  /// the context already holds and filters its siblings.
  pub(crate) fn with_selection_stages(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);
    pipeline.add_selection_stages();
    pipeline
  }

  fn add_selection_stages(&mut self) {
    self.add_stage(Box::new(SelectTopCandidateStage));
    self.add_stage(Box::new(FilterSiblingsStage));
  }
}
