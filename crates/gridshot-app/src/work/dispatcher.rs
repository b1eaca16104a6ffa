//! Worker thread ownership and the single in-flight job slot.

use std::sync::mpsc;

use crate::service::GridService;

use super::{Epoch, SpinnerKind, WorkError, WorkRequest, WorkResponse};

struct Job {
    epoch: Epoch,
    request: WorkRequest,
}

#[derive(Debug, Clone, Copy)]
struct PendingJob {
    kind: SpinnerKind,
}

/// Owns the worker thread and tracks the job currently in flight.
///
/// At most one job runs at a time. The UI keeps submission gated while a job
/// is pending, and [`poll`](Self::poll) drops responses stamped with an
/// epoch older than the current one.
pub(crate) struct Dispatcher {
    job_tx: mpsc::Sender<Job>,
    response_rx: mpsc::Receiver<(Epoch, WorkResponse)>,
    pending: Option<PendingJob>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.pending)
            .finish()
    }
}

impl Dispatcher {
    /// Spawns the worker thread, handing it the service client.
    #[must_use]
    pub(crate) fn spawn(service: Box<dyn GridService>) -> Self {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (response_tx, response_rx) = mpsc::channel();

        std::thread::spawn(move || {
            while let Ok(job) = job_rx.recv() {
                let response = job.request.handle(service.as_ref());
                if response_tx.send((job.epoch, response)).is_err() {
                    break;
                }
            }
        });

        Self {
            job_tx,
            response_rx,
            pending: None,
        }
    }

    /// Whether a job is in flight.
    #[must_use]
    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Progress overlay for the in-flight job, if any.
    #[must_use]
    pub(crate) fn pending_kind(&self) -> Option<SpinnerKind> {
        self.pending.map(|job| job.kind)
    }

    /// Enqueues a job stamped with `epoch`.
    ///
    /// Fails if a job is already in flight or the worker thread is gone. A
    /// restart does not free the slot early: the stale job's response frees
    /// it when it arrives and is dropped.
    pub(crate) fn enqueue(&mut self, epoch: Epoch, request: WorkRequest) -> Result<(), WorkError> {
        if self.pending.is_some() {
            return Err(WorkError::Busy);
        }
        let kind = request.spinner_kind();
        self.job_tx
            .send(Job { epoch, request })
            .map_err(|_| WorkError::WorkerDisconnected)?;
        self.pending = Some(PendingJob { kind });
        Ok(())
    }

    /// Polls for a completed response under the current epoch.
    ///
    /// Responses stamped with an older epoch are logged and dropped.
    pub(crate) fn poll(&mut self, current: Epoch) -> Result<Option<WorkResponse>, WorkError> {
        use mpsc::TryRecvError;

        loop {
            match self.response_rx.try_recv() {
                Ok((epoch, response)) => {
                    // Only one job is ever outstanding, so any response
                    // frees the slot.
                    self.pending = None;
                    if epoch == current {
                        return Ok(Some(response));
                    }
                    log::info!("dropping stale response from epoch {epoch} (current {current})");
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => {
                    self.pending = None;
                    return Err(WorkError::WorkerDisconnected);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gridshot_core::Board;

    use super::*;
    use crate::service::{DetectedGrid, RewarpedGrid, ServiceError, SessionHandle};

    #[derive(Debug)]
    struct IdleService;

    impl GridService for IdleService {
        fn upload(
            &self,
            _file_name: &str,
            _bytes: Vec<u8>,
        ) -> Result<SessionHandle, ServiceError> {
            Ok(SessionHandle::new("idle"))
        }

        fn detect_grid(&self, _session: &SessionHandle) -> Result<DetectedGrid, ServiceError> {
            Err(ServiceError::Rejected {
                message: "unused".to_owned(),
            })
        }

        fn manual_warp(
            &self,
            _session: &SessionHandle,
            _corners: [[f32; 2]; 4],
        ) -> Result<RewarpedGrid, ServiceError> {
            Err(ServiceError::Rejected {
                message: "unused".to_owned(),
            })
        }

        fn recognize(&self, _session: &SessionHandle) -> Result<[[u8; 9]; 9], ServiceError> {
            Ok([[0; 9]; 9])
        }
    }

    fn poll_until_response(dispatcher: &mut Dispatcher, epoch: Epoch) -> WorkResponse {
        for _ in 0..500 {
            if let Some(response) = dispatcher.poll(epoch).unwrap() {
                return response;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("worker produced no response in time");
    }

    #[test]
    fn enqueue_and_poll_round_trip() {
        let mut dispatcher = Dispatcher::spawn(Box::new(IdleService));
        let epoch = Epoch::default();

        dispatcher
            .enqueue(epoch, WorkRequest::Solve { board: Board::new() })
            .unwrap();
        assert!(dispatcher.has_pending());
        assert_eq!(dispatcher.pending_kind(), Some(SpinnerKind::Solve));

        let response = poll_until_response(&mut dispatcher, epoch);
        assert!(matches!(response, WorkResponse::SolveFinished(_)));
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn second_enqueue_while_pending_is_rejected() {
        let mut dispatcher = Dispatcher::spawn(Box::new(IdleService));
        let epoch = Epoch::default();

        dispatcher
            .enqueue(epoch, WorkRequest::Solve { board: Board::new() })
            .unwrap();
        let result = dispatcher.enqueue(epoch, WorkRequest::Solve { board: Board::new() });
        assert!(matches!(result, Err(WorkError::Busy)));
    }

    #[test]
    fn stale_epoch_response_is_dropped() {
        let mut dispatcher = Dispatcher::spawn(Box::new(IdleService));
        let old_epoch = Epoch::default();
        let mut new_epoch = old_epoch;
        new_epoch.next();

        dispatcher
            .enqueue(old_epoch, WorkRequest::Solve { board: Board::new() })
            .unwrap();

        // Poll under the new epoch: the stale response must be swallowed,
        // never surfaced.
        for _ in 0..500 {
            assert!(dispatcher.poll(new_epoch).unwrap().is_none());
            if !dispatcher.has_pending() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!dispatcher.has_pending());

        // The slot is free again for current-epoch work.
        dispatcher
            .enqueue(new_epoch, WorkRequest::Solve { board: Board::new() })
            .unwrap();
        let response = poll_until_response(&mut dispatcher, new_epoch);
        assert!(matches!(response, WorkResponse::SolveFinished(_)));
    }
}
