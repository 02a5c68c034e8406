use std::sync::Arc;

use crate::{
    domain::{DisciplineId, discipline::DisciplineRepository},
    error::{ServiceResult, found},
};

#[async_trait::async_trait]
pub trait RevealScoreUseCase {
    async fn set_reveal_score(&self, discipline_id: DisciplineId, reveal: bool)
    -> ServiceResult<()>;
}

pub struct RevealScoreUseCaseImpl<D: DisciplineRepository> {
    discipline_repository: Arc<D>,
}

impl<D: DisciplineRepository> RevealScoreUseCaseImpl<D> {
    pub fn new(discipline_repository: Arc<D>) -> Self {
        Self {
            discipline_repository,
        }
    }
}

#[async_trait::async_trait]
impl<D: DisciplineRepository + Send + Sync + 'static> RevealScoreUseCase
    for RevealScoreUseCaseImpl<D>
{
    async fn set_reveal_score(
        &self,
        discipline_id: DisciplineId,
        reveal: bool,
    ) -> ServiceResult<()> {
        let mut discipline = found(
            self.discipline_repository
                .get_discipline(discipline_id)
                .await,
            || format!("Discipline {} not found", discipline_id),
        )?;
        if discipline.reveal_score == reveal {
            return Ok(());
        }
        discipline.reveal_score = reveal;
        self.discipline_repository
            .update_discipline(discipline)
            .await?;
        log::info!(
            "Scores of discipline {} are now {}",
            discipline_id,
            if reveal { "revealed" } else { "hidden" }
        );
        Ok(())
    }
}
